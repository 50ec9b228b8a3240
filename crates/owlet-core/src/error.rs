//! Error types for Owlet.
//!
//! This module provides a unified error type for all ingestion-time and
//! configuration operations. Query-time failures never surface here: the
//! orchestrator reifies them as `DONT_KNOW` results instead.

use thiserror::Error;

/// Result type alias for Owlet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Owlet operations.
///
/// Each variant includes a descriptive error message suitable for end-users.
/// Error codes follow the pattern `OWLET-XXX` for easy debugging.
#[derive(Error, Debug)]
pub enum Error {
    /// Edge failed write-time validation (OWLET-001).
    #[error("[OWLET-001] Invalid edge: {0}")]
    InvalidEdge(String),

    /// Data-file ingestion error (OWLET-002).
    #[error("[OWLET-002] Ingestion error: {0}")]
    Ingestion(String),

    /// Configuration error (OWLET-003).
    #[error("[OWLET-003] Configuration error: {0}")]
    Config(String),

    /// IO error (OWLET-004).
    #[error("[OWLET-004] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error (OWLET-005).
    ///
    /// Indicates an unexpected internal error. Please report if encountered.
    #[error("[OWLET-005] Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Returns the error code (e.g., "OWLET-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidEdge(_) => "OWLET-001",
            Self::Ingestion(_) => "OWLET-002",
            Self::Config(_) => "OWLET-003",
            Self::Io(_) => "OWLET-004",
            Self::Internal(_) => "OWLET-005",
        }
    }

    /// Returns true if this error is recoverable.
    ///
    /// Non-recoverable errors indicate a bug rather than bad input.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}

/// Conversion from configuration errors.
impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
