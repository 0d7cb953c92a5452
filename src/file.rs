// src/file.rs

use std::{fs, path::Path};

use rust_xlsxwriter::{Format, Workbook};

use crate::config::options::Locale;
use crate::export::{ExportError, ExportRow};

// Rough column widths (characters) for code, name, license, status, date, URL
const COLUMN_WIDTHS: [f64; 6] = [12.0, 36.0, 20.0, 10.0, 12.0, 48.0];

/// Single sheet: bold header row, then one row per ExportRow.
pub fn write_workbook(path: &Path, rows: &[ExportRow], locale: Locale) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(locale.sheet_name())?;

        for (col, (title, width)) in locale.headers().iter().zip(COLUMN_WIDTHS).enumerate() {
            sheet.write_string_with_format(0, col as u16, *title, &header_format)?;
            sheet.set_column_width(col as u16, width)?;
        }

        for (i, row) in rows.iter().enumerate() {
            let r = (i + 1) as u32;
            for (col, cell) in row.cells().iter().enumerate() {
                if !cell.is_empty() {
                    sheet.write_string(r, col as u16, *cell)?;
                }
            }
        }

        sheet.set_freeze_panes(1, 0)?;
    }

    workbook.save(path)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.as_os_str().is_empty() { return Ok(()); }
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
