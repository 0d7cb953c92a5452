// src/gui/components/diff_view.rs
//
// Two-column (old | new) view of precomputed diff rows with line numbers.
// Purely a view.

use eframe::egui::{self, Color32, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::diff::{DiffRow, Line, LineKind};

const ROW_H: f32 = 18.0;
const LINE_NO_W: f32 = 36.0;

// Translucent so the tint reads on both light and dark themes
const REMOVED_BG: Color32 = Color32::from_rgba_premultiplied(60, 12, 16, 60);
const ADDED_BG: Color32 = Color32::from_rgba_premultiplied(10, 45, 18, 60);

pub fn draw(ui: &mut egui::Ui, id: usize, rows: &[DiffRow]) {
    if rows.is_empty() {
        ui.label(RichText::new("(no text)").weak());
        return;
    }

    TableBuilder::new(ui)
        .id_salt(("diff_view", id))
        .striped(false)
        .vscroll(false)
        .column(Column::exact(LINE_NO_W))
        .column(Column::remainder().clip(true).at_least(120.0))
        .column(Column::exact(LINE_NO_W))
        .column(Column::remainder().clip(true).at_least(120.0))
        .header(20.0, |mut header| {
            header.col(|_| {});
            header.col(|ui| { ui.strong("Previous record (old)"); });
            header.col(|_| {});
            header.col(|ui| { ui.strong("Latest (new)"); });
        })
        .body(|body| {
            body.rows(ROW_H, rows.len(), |mut row| {
                let Some(r) = rows.get(row.index()) else { return };
                let (left_bg, right_bg) = match r.kind {
                    LineKind::Same => (None, None),
                    LineKind::Removed => (Some(REMOVED_BG), None),
                    LineKind::Added => (None, Some(ADDED_BG)),
                    LineKind::Changed => (Some(REMOVED_BG), Some(ADDED_BG)),
                };
                side(&mut row, r.left.as_ref(), left_bg);
                side(&mut row, r.right.as_ref(), right_bg);
            });
        });
}

fn side(row: &mut egui_extras::TableRow<'_, '_>, line: Option<&Line>, bg: Option<Color32>) {
    row.col(|ui| {
        if let Some(l) = line {
            ui.label(RichText::new(l.no.to_string()).monospace().weak());
        }
    });
    row.col(|ui| {
        if let Some(c) = bg {
            ui.painter().rect_filled(ui.max_rect(), 0.0, c);
        }
        if let Some(l) = line {
            ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
            ui.label(RichText::new(&l.text).monospace()).on_hover_text(l.text.as_str());
        }
    });
}
