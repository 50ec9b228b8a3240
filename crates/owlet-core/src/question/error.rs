//! Error types for question parsing.

use std::fmt;

/// Error that occurred while parsing a question string.
///
/// Parse errors never escape the engine: the orchestrator converts them to
/// `DONT_KNOW` results. They are still typed so the CLI's `check` command
/// and the tests can inspect them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Kind of error.
    pub kind: ParseErrorKind,
    /// The problematic input (truncated for log hygiene).
    pub fragment: String,
    /// Human-readable message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error, truncating the offending input to a
    /// log-friendly length.
    #[must_use]
    pub fn new(kind: ParseErrorKind, input: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            fragment: input.chars().take(80).collect(),
            message: message.into(),
        }
    }

    /// Creates an unrecognized-pattern error.
    #[must_use]
    pub fn no_pattern(input: &str) -> Self {
        Self::new(
            ParseErrorKind::NoPattern,
            input,
            "question matches none of the recognized forms",
        )
    }

    /// Creates an empty-input error.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(ParseErrorKind::Empty, "", "empty question")
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: '{}'",
            self.kind.code(),
            self.message,
            self.fragment
        )
    }
}

impl std::error::Error for ParseError {}

/// Kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input matched none of the recognized question forms (Q001).
    NoPattern,
    /// The input was empty or whitespace (Q002).
    Empty,
}

impl ParseErrorKind {
    /// Returns the error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NoPattern => "Q001",
            Self::Empty => "Q002",
        }
    }
}
