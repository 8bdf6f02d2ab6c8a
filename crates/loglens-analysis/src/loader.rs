use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use loglens_types::LogRecord;

use crate::error::LoadError;
use crate::parser::LineParser;

/// Loads log files and turns them into record sequences
pub struct LogLoader;

impl LogLoader {
    /// Load and parse a log file, returning accepted records in file order.
    ///
    /// Loader-level failures are recovered: a missing or unreadable file
    /// yields an empty sequence after a diagnostic on the side channel, so
    /// the pipeline can continue as if the file held no logs.
    pub fn load(path: impl AsRef<Path>) -> Vec<LogRecord> {
        match Self::try_load(path) {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("{e}");
                Vec::new()
            }
        }
    }

    /// Strict variant of [`LogLoader::load`] that surfaces loader failures.
    ///
    /// Lines that fail to parse are still skipped with a per-line warning;
    /// only file-level problems become errors. A read failure part way
    /// through discards the records parsed so far.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Vec<LogRecord>, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Self::open_error(path, e))?;

        let mut records = Vec::new();
        let mut scanned: usize = 0;
        let mut skipped: usize = 0;

        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| LoadError::Read {
                path: path.to_path_buf(),
                source: e,
            })?;
            scanned += 1;

            match LineParser::parse(&line) {
                Ok(record) => records.push(record),
                Err(reason) => {
                    skipped += 1;
                    tracing::warn!("skipping malformed log line '{line}': {reason}");
                }
            }
        }

        tracing::debug!(scanned, accepted = records.len(), skipped, "log file scan complete");
        Ok(records)
    }

    fn open_error(path: &Path, source: std::io::Error) -> LoadError {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound(path.to_path_buf())
        } else {
            LoadError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}
