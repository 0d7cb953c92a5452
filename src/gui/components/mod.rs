// src/gui/components/mod.rs
pub mod diff_view;
pub mod entry_list;
pub mod header_bar;
