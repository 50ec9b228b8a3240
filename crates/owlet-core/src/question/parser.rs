//! Question parsing.
//!
//! Exactly three surface forms are recognized, tried in order against the
//! whole input (no partial matches):
//!
//! 1. `is <H> a type of <T>?`        -> subclass question
//! 2. `is <H> a <T>?` / `is <H> an <T>?` -> instance question
//! 3. `is <H> considered to be <T>?` -> attribute question
//!
//! Keywords are lowercase; captures preserve case and whitespace and are
//! greedy, so in "is my baby grand a musical instrument?" the head is
//! "my baby grand", split at the last ` a `.

use super::error::ParseError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use uuid::Uuid;

/// The kind of relationship a question asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    /// "is H a type of T?"
    #[serde(rename = "SUBCLASS_OF")]
    SubclassOf,
    /// "is H a T?" or "is H an T?"
    #[serde(rename = "INSTANCE_OF")]
    InstanceOf,
    /// "is H considered to be T?"
    #[serde(rename = "HAS_ATTRIBUTE")]
    HasAttribute,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::SubclassOf => "SUBCLASS_OF",
            Self::InstanceOf => "INSTANCE_OF",
            Self::HasAttribute => "HAS_ATTRIBUTE",
        };
        f.write_str(s)
    }
}

/// Patterns are tried in declaration order; the subclass form must come
/// before the instance form so "a type of" is not split at its ` a `.
static PATTERNS: LazyLock<[(QuestionType, Regex); 3]> = LazyLock::new(|| {
    [
        (
            QuestionType::SubclassOf,
            Regex::new(r"^is (.+) a type of (.+)\?$").expect("subclass pattern"),
        ),
        (
            QuestionType::InstanceOf,
            Regex::new(r"^is (.+) (?:a|an) (.+)\?$").expect("instance pattern"),
        ),
        (
            QuestionType::HasAttribute,
            Regex::new(r"^is (.+) considered to be (.+)\?$").expect("attribute pattern"),
        ),
    ]
});

/// A parsed question: a typed `(head, tail)` pair plus a correlation id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The relationship being asked about.
    pub question_type: QuestionType,
    /// Left-hand entity (the subject).
    pub head: String,
    /// Right-hand entity (class, parent class, or attribute).
    pub tail: String,
    /// Correlation id for this request.
    pub request_id: String,
}

impl Question {
    /// Builds a question directly from its parts, minting a fresh
    /// request id.
    #[must_use]
    pub fn new(question_type: QuestionType, head: &str, tail: &str) -> Self {
        Self {
            question_type,
            head: head.to_string(),
            tail: tail.to_string(),
            request_id: Uuid::new_v4().to_string(),
        }
    }

    /// Replaces the request id (builder pattern).
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    /// Parses a question string into its typed triple.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` when the input is empty or matches none of
    /// the three recognized forms.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::empty());
        }
        for (question_type, pattern) in PATTERNS.iter() {
            if let Some(captures) = pattern.captures(input) {
                return Ok(Self::new(*question_type, &captures[1], &captures[2]));
            }
        }
        Err(ParseError::no_pattern(input))
    }
}

/// Renders the canonical surface form; the instance form always uses `a`.
/// Formatting then parsing yields the original triple.
impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.question_type {
            QuestionType::SubclassOf => {
                write!(f, "is {} a type of {}?", self.head, self.tail)
            }
            QuestionType::InstanceOf => write!(f, "is {} a {}?", self.head, self.tail),
            QuestionType::HasAttribute => {
                write!(f, "is {} considered to be {}?", self.head, self.tail)
            }
        }
    }
}
