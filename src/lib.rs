// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;

pub mod diff;
pub mod export;
pub mod file;
pub mod filter;
pub mod loader;
pub mod model;
pub mod state;

pub mod gui;
