use loglens_types::{LevelCounts, LogRecord};

/// Tally accepted records per severity level.
///
/// Levels with no records are absent from the result rather than zero.
pub fn count_by_level(records: &[LogRecord]) -> LevelCounts {
    let mut counts = LevelCounts::new();
    for record in records {
        counts.increment(record.level);
    }
    counts
}

#[cfg(test)]
mod tests {
    use loglens_types::LogLevel;

    use super::*;

    fn record(level: LogLevel) -> LogRecord {
        LogRecord::new(
            "2024-01-01".to_string(),
            "10:00:00".to_string(),
            level,
            "message".to_string(),
        )
    }

    #[test]
    fn test_count_empty_input() {
        let counts = count_by_level(&[]);
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_count_single_level() {
        let records = vec![record(LogLevel::Info); 3];
        let counts = count_by_level(&records);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(LogLevel::Info), 3);
    }

    #[test]
    fn test_count_mixed_levels() {
        let records = vec![
            record(LogLevel::Info),
            record(LogLevel::Error),
            record(LogLevel::Debug),
            record(LogLevel::Error),
        ];
        let counts = count_by_level(&records);
        assert_eq!(counts.get(LogLevel::Info), 1);
        assert_eq!(counts.get(LogLevel::Error), 2);
        assert_eq!(counts.get(LogLevel::Debug), 1);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_unseen_level_reads_zero_and_is_absent() {
        let counts = count_by_level(&[record(LogLevel::Info)]);
        assert_eq!(counts.get(LogLevel::Warning), 0);
        assert!(counts.iter().all(|(level, _)| level != LogLevel::Warning));
    }

    #[test]
    fn test_count_is_order_insensitive() {
        let mut records = vec![
            record(LogLevel::Error),
            record(LogLevel::Info),
            record(LogLevel::Error),
        ];
        let forward = count_by_level(&records);
        records.reverse();
        assert_eq!(count_by_level(&records), forward);
    }
}
