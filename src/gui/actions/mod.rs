// src/gui/actions/mod.rs
//
// Things the header buttons trigger. Each one ends in `App::dispatch`.

mod export; // src/gui/actions/export.rs
mod load;   // src/gui/actions/load.rs

pub use export::export;
pub use load::{load, poll};
