//! Typed ontology edges.
//!
//! This module provides:
//! - `EdgeType`: the closed set of relationship kinds the engine reasons over
//! - `Edge`: a directed `(edge_type, head, tail)` triple with confidence and
//!   free-form metadata

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The kinds of edges the ontology recognizes.
///
/// The set is closed: unknown type names are rejected at ingestion time and
/// can never reach a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeType {
    /// Head is a subclass of tail. Transitive; every class is implicitly a
    /// subclass of itself.
    #[serde(rename = "SUBCLASS_OF")]
    SubclassOf,
    /// Head is an instance of tail. Not transitive; composes with
    /// `SubclassOf` on the tail side only.
    #[serde(rename = "INSTANCE_OF")]
    InstanceOf,
    /// Head (a class or instance) carries the attribute tail. Inherits
    /// downward through `SubclassOf` and `InstanceOf`.
    #[serde(rename = "HAS_ATTRIBUTE")]
    HasAttribute,
    /// Head and tail cannot share subclass/instance membership.
    #[serde(rename = "MUTUALLY_EXCLUSIVE")]
    MutuallyExclusive,
}

impl EdgeType {
    /// Returns the canonical wire name for this edge type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SubclassOf => "SUBCLASS_OF",
            Self::InstanceOf => "INSTANCE_OF",
            Self::HasAttribute => "HAS_ATTRIBUTE",
            Self::MutuallyExclusive => "MUTUALLY_EXCLUSIVE",
        }
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgeType {
    type Err = Error;

    /// Parses an edge-type name.
    ///
    /// Accepts the canonical names (`SUBCLASS_OF`, ...) and the CamelCase
    /// spellings used by existing ontology CSV exports (`SubclassOf`, ...).
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SUBCLASS_OF" | "SubclassOf" => Ok(Self::SubclassOf),
            "INSTANCE_OF" | "InstanceOf" => Ok(Self::InstanceOf),
            "HAS_ATTRIBUTE" | "HasAttribute" => Ok(Self::HasAttribute),
            "MUTUALLY_EXCLUSIVE" | "MutuallyExclusive" => Ok(Self::MutuallyExclusive),
            other => Err(Error::Ingestion(format!("unknown edge type '{other}'"))),
        }
    }
}

/// A directed edge in the ontology graph.
///
/// Edges are immutable once stored; re-inserting the same
/// `(edge_type, head, tail)` triple replaces confidence and metadata
/// wholesale (latest write wins).
///
/// # Example
///
/// ```rust
/// use owlet_core::{Edge, EdgeType};
///
/// let edge = Edge::new(EdgeType::HasAttribute, "hemlock", "poisonous")
///     .with_confidence(0.9);
/// assert_eq!(edge.head(), "hemlock");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    edge_type: EdgeType,
    head: String,
    tail: String,
    confidence: f32,
    metadata: HashMap<String, Value>,
}

impl Edge {
    /// Creates a new edge with default confidence 1.0 and no metadata.
    #[must_use]
    pub fn new(edge_type: EdgeType, head: &str, tail: &str) -> Self {
        Self {
            edge_type,
            head: head.to_string(),
            tail: tail.to_string(),
            confidence: 1.0,
            metadata: HashMap::new(),
        }
    }

    /// Sets the confidence for this edge (builder pattern).
    #[must_use]
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    /// Attaches metadata to this edge (builder pattern).
    #[must_use]
    pub fn with_metadata(mut self, metadata: HashMap<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Returns the edge type.
    #[must_use]
    pub fn edge_type(&self) -> EdgeType {
        self.edge_type
    }

    /// Returns the head entity name.
    #[must_use]
    pub fn head(&self) -> &str {
        &self.head
    }

    /// Returns the tail entity name.
    #[must_use]
    pub fn tail(&self) -> &str {
        &self.tail
    }

    /// Returns the confidence in [0, 1].
    #[must_use]
    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    /// Returns all metadata attached to this edge.
    #[must_use]
    pub fn metadata(&self) -> &HashMap<String, Value> {
        &self.metadata
    }

    /// Validates this edge for insertion.
    ///
    /// Endpoints must be non-empty, confidence must be finite and within
    /// [0, 1], and self-edges are only meaningful for `SubclassOf` (where
    /// the relation is reflexive anyway).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidEdge` describing the first violation found.
    pub fn validate(&self) -> Result<()> {
        if self.head.is_empty() {
            return Err(Error::InvalidEdge("empty head entity".into()));
        }
        if self.tail.is_empty() {
            return Err(Error::InvalidEdge("empty tail entity".into()));
        }
        if !self.confidence.is_finite() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(Error::InvalidEdge(format!(
                "confidence {} outside [0, 1]",
                self.confidence
            )));
        }
        if self.head == self.tail && self.edge_type != EdgeType::SubclassOf {
            return Err(Error::InvalidEdge(format!(
                "self-edge '{}' not permitted for {}",
                self.head, self.edge_type
            )));
        }
        Ok(())
    }
}
