//! Log processing for loglens
//!
//! This crate provides line parsing, file loading, level aggregation,
//! and level filtering.

mod aggregate;
mod error;
mod filter;
mod loader;
mod parser;

pub use aggregate::count_by_level;
pub use error::{LoadError, RejectReason};
pub use filter::filter_by_level;
pub use loader::LogLoader;
pub use parser::LineParser;

// Re-export types used in our public API
pub use loglens_types::{LevelCounts, LogLevel, LogRecord};
