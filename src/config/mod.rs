// src/config/mod.rs

pub mod consts;
pub mod options;

pub use options::{AppOptions, BucketSelection, ClassifyOptions, FetchOptions, ReportFormat, ReportOptions};
