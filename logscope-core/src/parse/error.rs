use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    MalformedLine,
}

/// A single log line that could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line_number}: malformed log line: {reason}")]
pub struct ParseError {
    pub line_number: usize,
    pub kind: ParseErrorKind,
    pub reason: String,
}

impl ParseError {
    pub fn malformed(line_number: usize, reason: impl Into<String>) -> Self {
        Self {
            line_number,
            kind: ParseErrorKind::MalformedLine,
            reason: reason.into(),
        }
    }
}
