use loglens_types::{LogLevel, LogRecord};

/// Keep only records matching the requested level, preserving order.
///
/// The request is matched case-insensitively. A request naming no known
/// level is not an error; it yields an empty result.
pub fn filter_by_level(records: &[LogRecord], requested: &str) -> Vec<LogRecord> {
    match LogLevel::from_str_insensitive(requested) {
        Some(level) => records
            .iter()
            .filter(|record| record.level == level)
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}
