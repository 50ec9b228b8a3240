//! # Owlet Core
//!
//! Ontology reasoning engine answering yes/no/don't-know questions over a
//! directed, typed knowledge graph.
//!
//! Owlet parses questions like "is X a type of Y?", "is X a Y?", and
//! "is X considered to be A?" into typed triples, evaluates them with a
//! bounded breadth-first traversal that understands subclass transitivity,
//! single-hop instance membership, downward attribute inheritance, and
//! explicit mutual exclusivity, and answers under the open-world
//! assumption: missing evidence is `DONT_KNOW`, never `NO`.
//!
//! ## Quick Start
//!
//! ```rust
//! use owlet_core::{Edge, EdgeType, Engine};
//!
//! let engine = Engine::default();
//! engine.add_edges(vec![
//!     Edge::new(EdgeType::SubclassOf, "dog", "animal"),
//!     Edge::new(EdgeType::InstanceOf, "Lassie", "dog"),
//! ])?;
//!
//! assert_eq!(engine.process("is Lassie an animal?").result.to_string(), "YES");
//! assert_eq!(
//!     engine.process("is dog a type of plant?").result.to_string(),
//!     "DONT_KNOW"
//! );
//! # Ok::<(), owlet_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod answer;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod question;
pub mod reason;

#[cfg(test)]
mod cache_tests;

pub use answer::{QueryMetrics, QueryResult, QuestionResult};
pub use cache::{CacheStats, QueryCache};
pub use config::{ConfigError, EngineConfig};
pub use engine::{Engine, EngineStats};
pub use error::{Error, Result};
pub use graph::{CancelFlag, Edge, EdgeType, ExecutionContext, GraphStore};
pub use question::{ParseError, Question, QuestionType};
