use serde::Serialize;

use loglens_types::{LevelCounts, LogRecord};

/// Machine-readable report for JSON output mode.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Total number of accepted records.
    pub total: u64,

    /// Count per level actually seen.
    pub counts: LevelCounts,

    /// Requested detail level, uppercased, when one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_level: Option<String>,

    /// Records matching the requested level, in file order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<LogRecord>>,
}

impl Report {
    /// Assemble a report from aggregated counts and an optional filter result.
    pub fn new(counts: LevelCounts, filtered: Option<(&str, Vec<LogRecord>)>) -> Self {
        let (requested_level, matches) = match filtered {
            Some((requested, records)) => (Some(requested.to_uppercase()), Some(records)),
            None => (None, None),
        };
        Self {
            total: counts.total(),
            counts,
            requested_level,
            matches,
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use loglens_types::LogLevel;

    use super::*;

    fn sample_counts() -> LevelCounts {
        let mut counts = LevelCounts::new();
        counts.increment(LogLevel::Info);
        counts.increment(LogLevel::Error);
        counts.increment(LogLevel::Error);
        counts
    }

    #[test]
    fn test_report_without_filter() {
        let report = Report::new(sample_counts(), None);
        let value: serde_json::Value =
            serde_json::from_str(&report.to_json_string().unwrap()).unwrap();

        assert_eq!(value["total"], 3);
        assert_eq!(value["counts"]["ERROR"], 2);
        assert_eq!(value["counts"]["INFO"], 1);
        assert!(value.get("requested_level").is_none());
        assert!(value.get("matches").is_none());
    }

    #[test]
    fn test_report_with_filter() {
        let matches = vec![LogRecord::new(
            "2024-01-01".to_string(),
            "10:00:05".to_string(),
            LogLevel::Error,
            "Connection failed".to_string(),
        )];
        let report = Report::new(sample_counts(), Some(("error", matches)));
        let value: serde_json::Value =
            serde_json::from_str(&report.to_json_string().unwrap()).unwrap();

        assert_eq!(value["requested_level"], "ERROR");
        assert_eq!(value["matches"][0]["level"], "ERROR");
        assert_eq!(value["matches"][0]["message"], "Connection failed");
    }

    #[test]
    fn test_report_with_empty_filter_result() {
        let report = Report::new(sample_counts(), Some(("warning", Vec::new())));
        let value: serde_json::Value =
            serde_json::from_str(&report.to_json_string().unwrap()).unwrap();

        assert_eq!(value["requested_level"], "WARNING");
        assert_eq!(value["matches"].as_array().unwrap().len(), 0);
    }
}
