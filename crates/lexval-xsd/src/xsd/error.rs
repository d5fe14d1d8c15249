//! Lexical parse error types.

use std::fmt;

/// Result type for lexical parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred while parsing a lexical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Byte offset into the literal where the error was detected.
    pub position: usize,
    /// Additional context or message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, position: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            position,
            message: message.into(),
        }
    }

    /// Creates a malformed-token error.
    #[must_use]
    pub fn lexical(position: usize, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::Lexical, position, message)
    }

    /// Creates an out-of-domain error for a well-formed token.
    #[must_use]
    pub fn range(position: usize, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::Range, position, message)
    }

    /// Creates an error for a digit sequence too wide for its field.
    #[must_use]
    pub fn overflow(position: usize, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::Overflow, position, message)
    }

    /// Creates an unexpected character error.
    #[must_use]
    pub fn unexpected(position: usize, expected: &str, found: Option<char>) -> Self {
        let found = found.map_or_else(|| "end of input".to_string(), |c| format!("'{c}'"));
        Self::lexical(position, format!("expected {expected}, found {found}"))
    }

    /// Shifts the position by `offset`, for errors raised on a slice of a
    /// larger literal.
    #[must_use]
    pub fn offset_by(mut self, offset: usize) -> Self {
        self.position += offset;
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "offset {}: {}: {}", self.position, self.kind, self.message)
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Malformed token: wrong separators, digit counts, stray or missing characters.
    Lexical,
    /// Well-formed but out of the value space (month 13, hour 25, offset beyond 14:00).
    Range,
    /// Digit sequence too large for a bounded field.
    Overflow,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexical => write!(f, "malformed literal"),
            Self::Range => write!(f, "value out of range"),
            Self::Overflow => write!(f, "numeric overflow"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_position() {
        let err = ParseError::range(5, "month must be 01..12");
        assert_eq!(
            err.to_string(),
            "offset 5: value out of range: month must be 01..12"
        );
    }

    #[test]
    fn unexpected_reports_end_of_input() {
        let err = ParseError::unexpected(3, "':'", None);
        assert_eq!(err.kind, ParseErrorKind::Lexical);
        assert_eq!(err.message, "expected ':', found end of input");
    }

    #[test]
    fn offset_by_shifts_position() {
        let err = ParseError::lexical(2, "bad").offset_by(10);
        assert_eq!(err.position, 12);
    }
}
