// src/gui/actions/load.rs
use std::sync::mpsc::{self, TryRecvError};
use std::thread;

use eframe::egui;

use crate::{
    gui::app::App,
    loader::{self, LoadError},
    state::Event,
};

/// Start a load unless one is already in flight. The fetch runs on a worker
/// thread so the UI keeps painting; the result comes back through `poll`.
pub fn load(app: &mut App, ctx: &egui::Context) {
    if app.state.is_loading() {
        logd!("Load: Clicked, but a load is already running");
        return;
    }
    app.dispatch(Event::LoadRequested);

    let (tx, rx) = mpsc::channel();
    let source = app.options.source.clone();
    let ctx2 = ctx.clone();

    logf!("Load: Begin {}", source.base.data_location());
    thread::spawn(move || {
        let outcome = loader::load(&source);
        // receiver gone means the window closed; nothing to report to
        let _ = tx.send(outcome);
        ctx2.request_repaint();
    });
    app.inbox = Some(rx);
}

/// Apply a finished load, if any. Called once per frame.
pub fn poll(app: &mut App) {
    let Some(rx) = app.inbox.as_ref() else { return };

    let event = match rx.try_recv() {
        Ok(Ok(ds)) => Event::LoadSucceeded(ds),
        Ok(Err(e)) => Event::LoadFailed(e),
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => {
            loge!("Load: Worker exited without a result");
            Event::LoadFailed(LoadError::Transport(s!("loader stopped unexpectedly")))
        }
    };

    app.inbox = None;
    app.dispatch(event);
    logf!("Load: {}", app.state.status_line());
}
