// src/core/mod.rs

pub mod error;
pub mod html;
pub mod net;

pub use error::{Error, Result};
