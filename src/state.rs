// src/state.rs
//
// Monitor view state as explicit transitions:
//   NotLoaded → Loading → { Loaded | Failed }   (Reload re-enters Loading)
// `reduce` is the only way state changes; the GUI and CLI feed it events.

use std::path::PathBuf;

use crate::config::consts::LAST_UPDATED_FAILED;
use crate::config::options::ViewMode;
use crate::loader::LoadError;
use crate::model::Dataset;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    NotLoaded,
    Loading,
    Loaded,
    Failed(LoadError),
}

/// User-facing message from the last export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

#[derive(Clone, Debug)]
pub enum Event {
    LoadRequested,
    LoadSucceeded(Dataset),
    LoadFailed(LoadError),
    ModeSelected(ViewMode),
    ExportSucceeded(PathBuf),
    ExportFailed(String),
    NoticeDismissed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonitorState {
    pub dataset: Dataset,
    pub status: LoadStatus,
    pub mode: ViewMode,
    pub notice: Option<Notice>,
    /// Bumped on every dataset replacement; anything derived from an older
    /// generation is stale.
    pub generation: u64,
}

impl MonitorState {
    pub fn new(mode: ViewMode) -> Self {
        Self {
            dataset: Dataset::pending(),
            status: LoadStatus::NotLoaded,
            mode,
            notice: None,
            generation: 0,
        }
    }

    #[inline] pub fn is_loading(&self) -> bool { self.status == LoadStatus::Loading }

    pub fn status_line(&self) -> String {
        match &self.status {
            LoadStatus::NotLoaded => s!("Idle"),
            LoadStatus::Loading => s!("Loading…"),
            LoadStatus::Loaded => format!("Ready: {} entries", self.dataset.len()),
            LoadStatus::Failed(e) => format!("Error: {e}"),
        }
    }
}

impl Default for MonitorState {
    fn default() -> Self { Self::new(ViewMode::default()) }
}

pub fn reduce(state: MonitorState, event: Event) -> MonitorState {
    match event {
        Event::LoadRequested => {
            if state.is_loading() {
                logd!("State: Load already in flight, ignoring request");
                return state;
            }
            MonitorState { status: LoadStatus::Loading, ..state }
        }

        Event::LoadSucceeded(dataset) => {
            if !state.is_loading() {
                logd!("State: Unexpected load result in {:?}, dropped", state.status);
                return state;
            }
            MonitorState {
                dataset,
                status: LoadStatus::Loaded,
                generation: state.generation + 1,
                ..state
            }
        }

        Event::LoadFailed(err) => {
            if !state.is_loading() {
                logd!("State: Unexpected load error in {:?}, dropped", state.status);
                return state;
            }
            // keep whatever items we had; only the timestamp reflects the failure
            let dataset = Dataset::new(state.dataset.items, LAST_UPDATED_FAILED);
            MonitorState {
                dataset,
                status: LoadStatus::Failed(err),
                ..state
            }
        }

        Event::ModeSelected(mode) => MonitorState { mode, ..state },

        Event::ExportSucceeded(path) => MonitorState {
            notice: Some(Notice::Info(format!("Exported {}", path.display()))),
            ..state
        },

        Event::ExportFailed(msg) => MonitorState {
            notice: Some(Notice::Error(format!("Export error: {msg}"))),
            ..state
        },

        Event::NoticeDismissed => MonitorState { notice: None, ..state },
    }
}
