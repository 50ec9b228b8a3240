//! Answer types returned by the engine.
//!
//! A question resolves to one of three verdicts: `YES`, `NO`, or
//! `DONT_KNOW`. Under the open-world assumption the absence of a path is
//! never evidence of absence, so `DONT_KNOW` is the common fallback and
//! `NO` is reserved for reflexivity rules and mutual-exclusivity edges.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict for a single question.
///
/// The wire spellings `"YES"`, `"NO"` and `"DONT_KNOW"` are a stable
/// contract; both `Display` and serde use them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionResult {
    /// The relationship is provable from the graph.
    #[serde(rename = "YES")]
    Yes,
    /// The relationship is refuted (reflexivity rule or mutual exclusivity).
    #[serde(rename = "NO")]
    No,
    /// The graph contains no evidence either way.
    #[serde(rename = "DONT_KNOW")]
    DontKnow,
}

impl fmt::Display for QuestionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Yes => "YES",
            Self::No => "NO",
            Self::DontKnow => "DONT_KNOW",
        };
        f.write_str(s)
    }
}

/// Per-query execution metrics gathered during reasoning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryMetrics {
    /// Wall-clock time spent reasoning, in milliseconds.
    pub execution_time_ms: f64,
    /// Number of entities dequeued across all traversals for this query.
    pub entities_visited: u64,
    /// Whether the answer came from the result cache.
    pub cache_hit: bool,
    /// Deepest BFS level reached.
    pub depth_reached: u32,
}

/// Full response for a processed question.
///
/// Every failure mode (parse failure, unknown entities, timeouts) is
/// reified here rather than raised: `process` never returns an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// The verdict.
    pub result: QuestionResult,
    /// Confidence in the verdict: 1.0 for cache hits, 0.95 for fresh
    /// inference, 0.0 when the question could not be evaluated at all.
    pub confidence: f32,
    /// Wall-clock time spent on this query, in milliseconds.
    pub execution_time_ms: f64,
    /// Number of entities visited during reasoning (0 on cache hits).
    pub entities_visited: u64,
    /// Whether the answer came from the result cache.
    pub cache_hit: bool,
    /// Deepest BFS level reached.
    pub depth_reached: u32,
    /// Human-readable note, set on every non-inference outcome.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Correlation id for this request.
    pub request_id: String,
}

impl QueryResult {
    /// Builds a `DONT_KNOW` result for a question that could not be
    /// evaluated (parse failure, unknown entities, unknown question type).
    #[must_use]
    pub fn not_evaluated(
        explanation: impl Into<String>,
        execution_time_ms: f64,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            result: QuestionResult::DontKnow,
            confidence: 0.0,
            execution_time_ms,
            entities_visited: 0,
            cache_hit: false,
            depth_reached: 0,
            explanation: Some(explanation.into()),
            request_id: request_id.into(),
        }
    }
}
