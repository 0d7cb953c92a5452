// src/gui/components/entry_list.rs
//
// One card per visible entry: name, code, source link, change badge and a
// collapsible diff. Diff rows are computed lazily (only for open cards) and
// cached per item index for the current dataset generation. Licenses are
// not unique keys here: one license can back several hospital codes.

use std::collections::HashMap;

use eframe::egui::{self, Align, Color32, Layout, RichText};

use crate::{
    config::options::ViewMode,
    diff::{self, diff_lines},
    filter,
    gui::app::App,
    model::Entry,
    state::LoadStatus,
};

use super::diff_view;

const BADGE_RED: Color32 = Color32::from_rgb(220, 53, 69);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let App { state, diff_cache, .. } = app;

    let mode = state.mode;
    let shown: Vec<(usize, &Entry)> = state
        .dataset
        .items
        .iter()
        .enumerate()
        .filter(|(_, e)| filter::keep(e, mode))
        .collect();

    if shown.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            match &state.status {
                LoadStatus::NotLoaded | LoadStatus::Loading => {
                    ui.heading("Loading…");
                }
                LoadStatus::Failed(e) => {
                    ui.heading("No entries loaded");
                    ui.label(e.to_string());
                }
                LoadStatus::Loaded => {
                    ui.heading("No matching entries");
                    if state.mode == ViewMode::ShowChanged {
                        ui.label("No package insert changes detected.");
                    }
                }
            }
        });
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (ix, entry) in shown {
                card(ui, ix, entry, diff_cache);
                ui.add_space(12.0);
            }
        });
}

fn card(ui: &mut egui::Ui, ix: usize, entry: &Entry, cache: &mut HashMap<usize, Vec<diff::DiffRow>>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.label(RichText::new(&entry.name).strong().size(16.0));
            ui.label(RichText::new(&entry.code).monospace());
            if !entry.fda_url.is_empty() {
                ui.hyperlink_to("[open source page]", &entry.fda_url);
            }

            if entry.is_changed {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let text = match entry.change_date() {
                        Some(d) => format!("Changed ({d})"),
                        None => s!("Changed"),
                    };
                    egui::Frame::new()
                        .fill(BADGE_RED)
                        .corner_radius(10.0)
                        .inner_margin(egui::Margin::symmetric(8, 2))
                        .show(ui, |ui| {
                            ui.label(RichText::new(text).color(Color32::WHITE).strong());
                        });
                });
            }
        });
        ui.label(RichText::new(format!("License: {}", entry.license)).weak());

        egui::CollapsingHeader::new("Label text")
            .id_salt(("entry", ix))
            .default_open(entry.is_changed)
            .show(ui, |ui| {
                let rows = cache
                    .entry(ix)
                    .or_insert_with(|| diff_lines(&entry.old_text, &entry.current_text));
                let st = diff::stats(rows);
                if !st.is_identical() {
                    ui.label(
                        RichText::new(format!(
                            "{} changed, {} removed, {} added line(s)",
                            st.changed, st.removed, st.added
                        ))
                        .weak(),
                    );
                }
                diff_view::draw(ui, ix, rows);
            });
    });
}
