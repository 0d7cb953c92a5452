// src/filter.rs
//
// Display list derived from the loaded dataset. Pure: borrows, never
// mutates, never caches; callers recompute on every frame/observation.

use crate::config::options::ViewMode;
use crate::model::{Dataset, Entry};

/// Entries shown for `mode`, in delivery order.
pub fn visible(dataset: &Dataset, mode: ViewMode) -> Vec<&Entry> {
    dataset.items.iter().filter(|e| keep(e, mode)).collect()
}

#[inline]
pub fn keep(entry: &Entry, mode: ViewMode) -> bool {
    match mode {
        ViewMode::ShowAll => true,
        ViewMode::ShowChanged => entry.is_changed,
    }
}

pub fn changed_count(dataset: &Dataset) -> usize {
    dataset.items.iter().filter(|e| e.is_changed).count()
}
