// src/gui/components/header_bar.rs
//
// Title, snapshot timestamp, view-mode toggle, Download/Reload buttons and
// the status/notice line. All state changes go through app.dispatch.

use eframe::egui::{self, Color32, RichText, Button};
use crate::{
    config::options::ViewMode,
    filter,
    gui::{actions, app::{App, WINDOW_TITLE}},
    state::{Event, LoadStatus, Notice},
};

const RED: Color32 = Color32::from_rgb(220, 53, 69);
const GREEN: Color32 = Color32::from_rgb(40, 167, 69);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ctx = ui.ctx().clone();

    ui.add_space(4.0);
    ui.heading(WINDOW_TITLE);

    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("Last updated: {}", app.state.dataset.last_updated)).weak());
        ui.separator();

        // --- Mode toggle ---
        let changed = filter::changed_count(&app.state.dataset);
        let mut mode = app.state.mode;
        ui.selectable_value(&mut mode, ViewMode::ShowAll, "Show all");
        ui.selectable_value(&mut mode, ViewMode::ShowChanged, format!("Changed only ({changed})"));
        if mode != app.state.mode {
            logf!("UI: View mode → {:?}", mode);
            app.dispatch(Event::ModeSelected(mode));
        }

        ui.separator();

        // --- Actions ---
        let download = Button::new(RichText::new("Download Excel").color(Color32::WHITE).strong()).fill(GREEN);
        if ui.add(download).clicked() {
            actions::export(app);
        }

        let loading = app.state.is_loading();
        if ui.add_enabled(!loading, Button::new("Reload")).clicked() {
            logf!("UI: Reload");
            actions::load(app, &ctx);
        }
        if loading {
            ui.spinner();
        }
    });

    ui.horizontal(|ui| {
        let status = app.state.status_line();
        match app.state.status {
            LoadStatus::Failed(_) => ui.colored_label(RED, format!("Status: {status}")),
            _ => ui.label(format!("Status: {status}")),
        };

        let mut dismiss = false;
        if let Some(notice) = &app.state.notice {
            ui.separator();
            match notice {
                Notice::Info(msg) => ui.label(msg),
                Notice::Error(msg) => ui.colored_label(RED, msg),
            };
            dismiss = ui.small_button("Dismiss").clicked();
        }
        if dismiss {
            app.dispatch(Event::NoticeDismissed);
        }
    });
    ui.add_space(4.0);
}
