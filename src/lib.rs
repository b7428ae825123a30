// src/lib.rs
#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod model;
pub mod progress;
pub mod report;
pub mod runner;
pub mod scrape;
pub mod source;
pub mod specs;
pub mod stats;

pub use crate::core::{Error, Result};
