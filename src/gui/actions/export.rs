// src/gui/actions/export.rs
use crate::{
    export::export_report,
    filter,
    gui::app::App,
    state::Event,
};

/// Export what the list currently shows; an empty list still writes the
/// header row. Never touches the dataset.
pub fn export(app: &mut App) {
    let today = chrono::Local::now().date_naive();

    let event = {
        let shown = filter::visible(&app.state.dataset, app.state.mode);
        if shown.is_empty() {
            logd!("Export: Nothing shown, writing header only");
        }
        match export_report(&app.options.export, shown, today) {
            Ok(path) => Event::ExportSucceeded(path),
            Err(e) => Event::ExportFailed(e.to_string()),
        }
    };

    // mutate app only after the dataset borrow is gone
    app.dispatch(event);
}
