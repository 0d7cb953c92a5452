// src/log.rs
//
// Append-only debug log at .store/debug.log. Lines look like
//   [00:00:01.250][INFO] Load: OK items=412 last_updated=2024-05-02
// where the stamp is time since the first log call. Logging never fails
// the caller; an unwritable store just loses the line.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::{Duration, Instant};

use crate::config::consts::{LOG_FILE, STORE_DIR};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Debug,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Error => "ERROR",
        }
    }
}

static SINK: Mutex<()> = Mutex::new(());
static EPOCH: OnceLock<Instant> = OnceLock::new();

fn since_start() -> Duration {
    EPOCH.get_or_init(Instant::now).elapsed()
}

fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

fn stamp(d: Duration) -> String {
    let ms = d.as_millis() as u64;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        ms / 3_600_000,
        ms / 60_000 % 60,
        ms / 1_000 % 60,
        ms % 1_000
    )
}

fn format_line(at: Duration, level: Level, msg: &str) -> String {
    format!("[{}][{}] {msg}\n", stamp(at), level.tag())
}

/// Backing call for the log macros.
pub fn write(level: Level, msg: &str) {
    let line = format_line(since_start(), level, msg);

    let Ok(_held) = SINK.lock() else { return };
    let _ = fs::create_dir_all(STORE_DIR);
    if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(log_path()) {
        let _ = f.write_all(line.as_bytes());
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write($crate::log::Level::Info, &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write($crate::log::Level::Debug, &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write($crate::log::Level::Error, &format!($($arg)*))
    };
}
