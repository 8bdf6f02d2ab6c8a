//! Error types for log analysis.

use std::path::PathBuf;

use thiserror::Error;

/// Why a single line was rejected by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// The line has fewer than four whitespace-delimited fields.
    #[error("too few fields")]
    TooFewFields,

    /// The third field is not one of the known level tokens.
    #[error("unrecognized level '{0}'")]
    UnrecognizedLevel(String),
}

/// Why a log file could not be loaded at all.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path does not resolve to a readable file.
    #[error("log file '{0}' not found")]
    NotFound(PathBuf),

    /// The file exists but reading it failed.
    #[error("failed to read log file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_reason_display() {
        assert_eq!(RejectReason::TooFewFields.to_string(), "too few fields");
        assert_eq!(
            RejectReason::UnrecognizedLevel("info".to_string()).to_string(),
            "unrecognized level 'info'"
        );
    }

    #[test]
    fn test_load_error_display() {
        let err = LoadError::NotFound(PathBuf::from("missing.log"));
        assert_eq!(err.to_string(), "log file 'missing.log' not found");

        let err = LoadError::Read {
            path: PathBuf::from("app.log"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("app.log"));
        assert!(err.to_string().contains("denied"));
    }
}
