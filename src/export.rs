// src/export.rs
//
// Displayed entries → flat report rows → workbook on disk.
// Column order is fixed: code, name, license, changed label, change date, URL.

use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use rust_xlsxwriter::XlsxError;
use thiserror::Error;

use crate::config::options::{ExportOptions, Locale};
use crate::file;
use crate::model::Entry;

pub const COLUMN_COUNT: usize = 6;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("XLSX error: {0}")]
    Xlsx(#[from] XlsxError),
    #[error("Path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportRow {
    pub code: String,
    pub name: String,
    pub license: String,
    pub changed_label: String,
    pub last_change_date: String,
    pub fda_url: String,
}

impl ExportRow {
    pub fn from_entry(entry: &Entry, locale: Locale) -> Self {
        Self {
            code: entry.code.clone(),
            name: entry.name.clone(),
            license: entry.license.clone(),
            changed_label: s!(locale.changed_label(entry.is_changed)),
            last_change_date: s!(entry.change_date().unwrap_or_default()),
            fda_url: entry.fda_url.clone(),
        }
    }

    pub fn cells(&self) -> [&str; COLUMN_COUNT] {
        [
            &self.code,
            &self.name,
            &self.license,
            &self.changed_label,
            &self.last_change_date,
            &self.fda_url,
        ]
    }
}

/// One row per entry, same order.
pub fn export_rows<'a, I>(entries: I, locale: Locale) -> Vec<ExportRow>
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries.into_iter().map(|e| ExportRow::from_entry(e, locale)).collect()
}

/// Write `<out_dir>/<prefix>_<date>.xlsx` for the given entries and return
/// the path. The entries are only read.
pub fn export_report<'a, I>(
    options: &ExportOptions,
    entries: I,
    date: NaiveDate,
) -> Result<PathBuf, ExportError>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let rows = export_rows(entries, options.locale);
    let path = options.out_path(date);

    logf!("Export: Begin rows={} → {}", rows.len(), path.display());

    file::ensure_directory(&options.out_dir)?;
    file::write_workbook(&path, &rows, options.locale)
        .inspect_err(|e| loge!("Export: Error: {e}"))?;

    logf!("Export: OK {}", path.display());
    Ok(path)
}
