//! Shared types for loglens
//!
//! This crate contains data structures used across multiple loglens crates.

use serde::Serialize;
use std::collections::BTreeMap;

// ============================================================================
// Log Levels
// ============================================================================

/// Log severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// Parse a raw level token exactly as it appears in a log line.
    ///
    /// The match is case-sensitive: `INFO` is a level, `info` is not.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "INFO" => Some(Self::Info),
            "ERROR" => Some(Self::Error),
            "DEBUG" => Some(Self::Debug),
            "WARNING" => Some(Self::Warning),
            _ => None,
        }
    }

    /// Parse a level name regardless of case, for user-supplied input
    pub fn from_str_insensitive(s: &str) -> Option<Self> {
        Self::from_token(s.to_uppercase().as_str())
    }

    /// Canonical uppercase token for this level
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

// ============================================================================
// Log Records
// ============================================================================

/// A single parsed log record
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// First whitespace-delimited field, free-form (not validated as a date)
    pub date: String,

    /// Second whitespace-delimited field, free-form
    pub time: String,

    /// Severity level parsed from the third field
    pub level: LogLevel,

    /// Rest of the line, trimmed at both ends
    pub message: String,
}

impl LogRecord {
    pub fn new(date: String, time: String, level: LogLevel, message: String) -> Self {
        Self {
            date,
            time,
            level,
            message,
        }
    }
}

// ============================================================================
// Level Counts
// ============================================================================

/// Record tally per log level
///
/// Levels with no records are absent rather than stored as zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LevelCounts(BTreeMap<LogLevel, u64>);

impl LevelCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one record to the tally for a level
    pub fn increment(&mut self, level: LogLevel) {
        *self.0.entry(level).or_insert(0) += 1;
    }

    /// Count for a level; absent means zero
    pub fn get(&self, level: LogLevel) -> u64 {
        self.0.get(&level).copied().unwrap_or(0)
    }

    /// Iterate over the levels actually seen
    pub fn iter(&self) -> impl Iterator<Item = (LogLevel, u64)> + '_ {
        self.0.iter().map(|(level, count)| (*level, *count))
    }

    /// Number of distinct levels seen
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total records across all levels
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }
}
