//! Report rendering for loglens
//!
//! This crate turns aggregated counts and filtered records into the text
//! sections written to standard output, plus a JSON report variant.

mod json;
mod text;

pub use json::Report;
pub use text::{render_counts, render_filtered};

// Re-export types used in our public API
pub use loglens_types::{LevelCounts, LogRecord};
