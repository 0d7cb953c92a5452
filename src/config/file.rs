// src/config/file.rs
//
// Optional key=value config next to the binary's working directory:
//
//   # fda_monitor.cfg
//   base=https://example.org/fda-monitor/
//   timeout_secs=20
//   mode=changed
//   out_dir=reports
//   prefix=weekly
//   locale=zh-tw
//
// Values are validated as they are applied; a bad value is an error, an
// unknown key is only logged.

use std::{fs, io, path::Path};

use super::options::{AppOptions, ConfigError, DataSource, Locale, ViewMode};

/// Apply the file at `path` onto `opts`. Returns `Ok(false)` when the file
/// doesn't exist.
pub fn apply_file(opts: &mut AppOptions, path: &Path) -> Result<bool, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => {
            return Err(ConfigError::Unreadable { path: path.to_path_buf(), reason: e.to_string() });
        }
    };
    apply_text(opts, &text)?;
    logf!("Config: Applied {}", path.display());
    Ok(true)
}

pub fn apply_text(opts: &mut AppOptions, text: &str) -> Result<(), ConfigError> {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        if let Some(eq) = line.find('=') {
            let key = line[..eq].trim();
            let val = line[eq+1..].trim();
            apply_pair(opts, key, val)?;
        } else {
            logd!("Config: Ignoring line without '=': {line}");
        }
    }
    Ok(())
}

pub fn apply_pair(opts: &mut AppOptions, key: &str, val: &str) -> Result<(), ConfigError> {
    match key {
        "base" => opts.source.base = DataSource::parse(val)?,
        "timeout_secs" => opts.source.set_timeout_secs(val)?,
        "mode" => opts.view = ViewMode::parse(val)?,
        "out_dir" => opts.export.set_out_dir(val),
        "prefix" => opts.export.set_prefix(val),
        "locale" => opts.export.locale = Locale::parse(val)?,
        other => logd!("Config: Unknown key '{other}' ignored"),
    }
    Ok(())
}
