// src/config/consts.rs

// Source
pub const DATA_FILE: &str = "data.json";
pub const DEFAULT_BASE: &str = match option_env!("FDA_MONITOR_BASE") {
    Some(base) => base,
    None => "public",
};
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("fda_monitor/", env!("CARGO_PKG_VERSION"));

// Dataset timestamp sentinels
pub const LAST_UPDATED_LOADING: &str = "loading…";
pub const LAST_UPDATED_UNKNOWN: &str = "unknown";
pub const LAST_UPDATED_FAILED: &str = "load failed";

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const CONFIG_FILE: &str = "fda_monitor.cfg";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const REPORT_EXT: &str = "xlsx";

// Diff
pub const DIFF_DP_WORK_LIMIT: usize = 2_000_000; // old_lines * new_lines cells
