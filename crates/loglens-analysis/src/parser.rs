use loglens_types::{LogLevel, LogRecord};

use crate::error::RejectReason;

/// Parses raw log lines into structured records
pub struct LineParser;

impl LineParser {
    /// Parse one line of the form `<date> <time> <LEVEL> <message...>`.
    ///
    /// Fields are separated by runs of whitespace. The first three become
    /// date, time, and level; the rest of the line is the message, trimmed
    /// at both ends with internal whitespace preserved. The level token must
    /// match one of `INFO`, `ERROR`, `DEBUG`, `WARNING` exactly.
    pub fn parse(line: &str) -> Result<LogRecord, RejectReason> {
        let (date, rest) = Self::next_field(line).ok_or(RejectReason::TooFewFields)?;
        let (time, rest) = Self::next_field(rest).ok_or(RejectReason::TooFewFields)?;
        let (token, rest) = Self::next_field(rest).ok_or(RejectReason::TooFewFields)?;

        // A message of pure whitespace counts as a missing fourth field
        let message = rest.trim();
        if message.is_empty() {
            return Err(RejectReason::TooFewFields);
        }

        let level = LogLevel::from_token(token)
            .ok_or_else(|| RejectReason::UnrecognizedLevel(token.to_string()))?;

        Ok(LogRecord::new(
            date.to_string(),
            time.to_string(),
            level,
            message.to_string(),
        ))
    }

    /// Split off the next whitespace-delimited field, returning it and the rest
    fn next_field(input: &str) -> Option<(&str, &str)> {
        let input = input.trim_start();
        if input.is_empty() {
            return None;
        }
        match input.find(char::is_whitespace) {
            Some(end) => Some((&input[..end], &input[end..])),
            None => Some((input, "")),
        }
    }
}
