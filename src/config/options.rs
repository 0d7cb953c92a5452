// src/config/options.rs
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Url;
use thiserror::Error;

use super::consts::*;
use crate::core::sanitize::sanitize_file_stem;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid base '{0}': {1}")]
    InvalidBase(String, String),
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
    #[error("Cannot read config {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },
}

#[derive(Clone, Debug, Default)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub view: ViewMode,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Defaults overlaid with the config file at `path`, if present.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut opts = Self::default();
        if !super::file::apply_file(&mut opts, path)? {
            logd!("Config: {} not found, using defaults", path.display());
        }
        Ok(opts)
    }
}

/* ---------- source ---------- */

/// Where `data.json` lives: a deployment URL or a local directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    Remote(Url),
    Local(PathBuf),
}

/// Resolved location of the data document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    Url(Url),
    Path(PathBuf),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Url(u) => write!(f, "{u}"),
            Location::Path(p) => write!(f, "{}", p.display()),
        }
    }
}

impl DataSource {
    /// Validate a base setting once. `http(s)://` → remote, anything else is
    /// a directory on disk (it may not exist yet; that surfaces at load time).
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let s = text.trim();
        if s.is_empty() {
            return Err(ConfigError::InvalidBase(s!(text), s!("empty")));
        }

        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            // Url::join drops the last segment unless the base ends in '/'
            let with_slash = if s.ends_with('/') { s!(s) } else { join!(s, "/") };
            let url = Url::parse(&with_slash)
                .map_err(|e| ConfigError::InvalidBase(s!(s), e.to_string()))?;
            if url.host_str().is_none() {
                return Err(ConfigError::InvalidBase(s!(s), s!("missing host")));
            }
            return Ok(DataSource::Remote(url));
        }
        if lower.contains("://") {
            return Err(ConfigError::InvalidBase(s!(s), s!("unsupported scheme")));
        }

        let dir = PathBuf::from(s);
        if dir.exists() && !dir.is_dir() {
            return Err(ConfigError::InvalidBase(s!(s), s!("not a directory")));
        }
        Ok(DataSource::Local(dir))
    }

    pub fn data_location(&self) -> Location {
        match self {
            DataSource::Remote(base) => match base.join(DATA_FILE) {
                Ok(url) => Location::Url(url),
                // join only fails on cannot-be-a-base URLs, which parse() rejects
                Err(_) => Location::Url(base.clone()),
            },
            DataSource::Local(dir) => Location::Path(dir.join(DATA_FILE)),
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::parse(DEFAULT_BASE).unwrap_or_else(|_| DataSource::Local(PathBuf::from(DEFAULT_BASE)))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub base: DataSource,
    pub timeout: Duration,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            base: DataSource::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SourceOptions {
    pub fn set_timeout_secs(&mut self, text: &str) -> Result<(), ConfigError> {
        match text.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => {
                self.timeout = Duration::from_secs(secs);
                Ok(())
            }
            _ => Err(ConfigError::InvalidValue { key: s!("timeout_secs"), value: s!(text) }),
        }
    }
}

/* ---------- view ---------- */

/// Which entries the view shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    #[default]
    ShowAll,
    ShowChanged,
}

impl ViewMode {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        match text.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(ViewMode::ShowAll),
            "changed" => Ok(ViewMode::ShowChanged),
            _ => Err(ConfigError::InvalidValue { key: s!("mode"), value: s!(text) }),
        }
    }
}

/* ---------- export ---------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    ZhTw,
}

impl Locale {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        match text.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en" => Ok(Locale::En),
            "zh-tw" | "zh" => Ok(Locale::ZhTw),
            _ => Err(ConfigError::InvalidValue { key: s!("locale"), value: s!(text) }),
        }
    }

    /// Column headers in fixed export order.
    pub fn headers(self) -> [&'static str; 6] {
        match self {
            Locale::En => ["Code", "Name", "License", "Status", "Change date", "Source URL"],
            Locale::ZhTw => ["院內代碼", "藥名", "許可證字號", "異動狀態", "異動日期", "衛福部連結"],
        }
    }

    pub fn changed_label(self, is_changed: bool) -> &'static str {
        match (self, is_changed) {
            (Locale::En, true) => "changed",
            (Locale::En, false) => "none",
            (Locale::ZhTw, true) => "有異動",
            (Locale::ZhTw, false) => "無",
        }
    }

    pub fn sheet_name(self) -> &'static str {
        match self {
            Locale::En => "Changes",
            Locale::ZhTw => "異動報表",
        }
    }

    pub fn default_prefix(self) -> &'static str {
        match self {
            Locale::En => "report",
            Locale::ZhTw => "仿單異動檢查表",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    /// None → the locale's default prefix
    pub prefix: Option<String>,
    pub locale: Locale,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            prefix: None,
            locale: Locale::default(),
        }
    }
}

impl ExportOptions {
    pub fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or(self.locale.default_prefix())
    }

    /// `<prefix>_<YYYY-MM-DD>.xlsx`
    pub fn file_name(&self, date: NaiveDate) -> String {
        let stem = sanitize_file_stem(self.prefix(), self.locale.default_prefix());
        join!(stem, "_", &date.format("%Y-%m-%d").to_string(), ".", REPORT_EXT)
    }

    pub fn out_path(&self, date: NaiveDate) -> PathBuf {
        self.out_dir.join(self.file_name(date))
    }

    pub fn set_prefix(&mut self, text: &str) {
        let t = text.trim();
        self.prefix = if t.is_empty() { None } else { Some(s!(t)) };
    }

    pub fn set_out_dir(&mut self, text: &str) {
        let t = text.trim();
        self.out_dir = if t.is_empty() { PathBuf::from(DEFAULT_OUT_DIR) } else { Path::new(t).to_path_buf() };
    }
}
