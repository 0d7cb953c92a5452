// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
    sync::mpsc::Receiver,
};

use eframe::egui;

use crate::{
    config::options::AppOptions,
    diff::DiffRow,
    loader::LoadError,
    model::Dataset,
    state::{reduce, Event, MonitorState},
};

use super::{actions, components};

pub const WINDOW_TITLE: &str = "Package Insert Change Monitor";

pub fn run(options: eframe::NativeOptions, app_options: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(App::new(app_options, &cc.egui_ctx)))),
    )?;
    Ok(())
}

pub type LoadOutcome = Result<Dataset, LoadError>;

pub struct App {
    pub options: AppOptions,

    // single source of truth (UI thread only)
    pub state: MonitorState,

    // in-flight load; the worker sends exactly one outcome
    pub inbox: Option<Receiver<LoadOutcome>>,

    // diff rows per item index, valid for `diff_generation` only
    pub diff_cache: HashMap<usize, Vec<DiffRow>>,
    pub diff_generation: u64,
}

impl App {
    pub fn new(options: AppOptions, ctx: &egui::Context) -> Self {
        logf!("Init: source={:?} mode={:?}", options.source.base, options.view);

        let mut app = Self {
            state: MonitorState::new(options.view),
            options,
            inbox: None,
            diff_cache: HashMap::new(),
            diff_generation: 0,
        };
        actions::load(&mut app, ctx);
        app
    }

    /// Run one event through the reducer.
    pub fn dispatch(&mut self, event: Event) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, event);

        if self.state.generation != self.diff_generation {
            logd!("Diff cache: dropped {} entr(ies) for new dataset", self.diff_cache.len());
            self.diff_cache.clear();
            self.diff_generation = self.state.generation;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll(self);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            components::header_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::entry_list::draw(ui, self);
        });
    }
}
