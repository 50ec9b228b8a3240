//! End-to-end query orchestration.
//!
//! The engine is a firewall: `process` parses, validates, and coordinates,
//! and every failure mode along the way is reified as a `DONT_KNOW`
//! `QueryResult` with an explanation. Nothing here panics on user input
//! and nothing returns `Err` to the caller.

use crate::answer::QueryResult;
use crate::cache::{CacheStats, QueryCache};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::graph::{CancelFlag, Edge, GraphStore};
use crate::question::Question;
use crate::reason::{EntityValidator, ReasoningCoordinator};
use parking_lot::RwLock;
use std::time::Instant;
use uuid::Uuid;

/// Point-in-time counters for an engine instance.
#[derive(Debug, Clone, Copy)]
pub struct EngineStats {
    /// Distinct entities in the graph.
    pub entities: usize,
    /// Distinct edges in the graph.
    pub edges: usize,
    /// Result-cache counters.
    pub cache: CacheStats,
}

/// The ontology question engine.
///
/// Owns the graph store (single writer, many readers), the result cache,
/// and the strategy registry. Queries may run concurrently; `add_edges`
/// excludes them for the duration of the write and invalidates the cache
/// wholesale.
///
/// # Example
///
/// ```rust
/// use owlet_core::{Edge, EdgeType, Engine};
///
/// let engine = Engine::default();
/// engine.add_edges(vec![
///     Edge::new(EdgeType::SubclassOf, "hemlock", "plant"),
///     Edge::new(EdgeType::HasAttribute, "hemlock", "poisonous"),
/// ])?;
///
/// let answer = engine.process("is hemlock considered to be poisonous?");
/// assert_eq!(answer.result.to_string(), "YES");
/// # Ok::<(), owlet_core::Error>(())
/// ```
pub struct Engine {
    config: EngineConfig,
    store: RwLock<GraphStore>,
    cache: QueryCache,
    coordinator: ReasoningCoordinator,
    validator: EntityValidator,
}

impl Engine {
    /// Creates an engine from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the configuration fails validation.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            cache: QueryCache::new(config.cache.capacity),
            config,
            store: RwLock::new(GraphStore::new()),
            coordinator: ReasoningCoordinator::with_default_strategies(),
            validator: EntityValidator::new(),
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Inserts a batch of edges and invalidates the result cache.
    ///
    /// Returns the number of newly created edges.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidEdge` if an edge fails write-time validation.
    pub fn add_edges(&self, edges: Vec<Edge>) -> Result<usize> {
        let inserted = self.store.write().add_edges(edges)?;
        // No partial invalidation: any mutation drops the whole cache.
        self.cache.clear();
        Ok(inserted)
    }

    /// Processes a natural-language question end to end.
    #[must_use]
    pub fn process(&self, question_text: &str) -> QueryResult {
        self.process_inner(question_text, None)
    }

    /// Processes a question with a caller-held cancellation flag.
    ///
    /// Cancelling mid-flight surfaces as `DONT_KNOW` with a "cancelled"
    /// explanation.
    #[must_use]
    pub fn process_with_cancel(&self, question_text: &str, cancel: CancelFlag) -> QueryResult {
        self.process_inner(question_text, Some(cancel))
    }

    fn process_inner(&self, question_text: &str, cancel: Option<CancelFlag>) -> QueryResult {
        let started = Instant::now();

        let question = match Question::parse(question_text) {
            Ok(question) => question,
            Err(err) => {
                tracing::warn!(%err, "question rejected");
                return QueryResult::not_evaluated(
                    format!("unable to parse question: {err}"),
                    elapsed_ms(started),
                    Uuid::new_v4().to_string(),
                );
            }
        };

        tracing::debug!(
            request_id = %question.request_id,
            question_type = %question.question_type,
            head = %question.head,
            tail = %question.tail,
            "question accepted"
        );

        let store = self.store.read();

        if !self
            .validator
            .entities_exist(&store, &question.head, &question.tail)
        {
            let missing = self
                .validator
                .missing_entities(&store, &question.head, &question.tail)
                .join(", ");
            return QueryResult::not_evaluated(
                format!("entities not found: {missing}"),
                elapsed_ms(started),
                question.request_id,
            );
        }

        let cache = self.config.cache.enabled.then_some(&self.cache);
        self.coordinator
            .answer(&store, cache, &question, &self.config.traversal, cancel)
    }

    /// Returns current entity/edge/cache counters.
    #[must_use]
    pub fn stats(&self) -> EngineStats {
        let store = self.store.read();
        EngineStats {
            entities: store.entity_count(),
            edges: store.edge_count(),
            cache: self.cache.stats(),
        }
    }
}

impl Default for Engine {
    /// Creates an engine with the default configuration.
    fn default() -> Self {
        Self::new(EngineConfig::default()).expect("default configuration is valid")
    }
}

fn elapsed_ms(since: Instant) -> f64 {
    since.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::QuestionResult;
    use crate::graph::EdgeType;

    fn engine() -> Engine {
        let engine = Engine::default();
        engine
            .add_edges(vec![
                Edge::new(EdgeType::SubclassOf, "dog", "animal"),
                Edge::new(EdgeType::InstanceOf, "Lassie", "dog"),
            ])
            .unwrap();
        engine
    }

    #[test]
    fn test_parse_failure_is_reified_not_raised() {
        let result = engine().process("tell me about dogs");

        assert_eq!(result.result, QuestionResult::DontKnow);
        assert!((result.confidence - 0.0).abs() < f32::EPSILON);
        assert!(result
            .explanation
            .as_deref()
            .unwrap()
            .contains("unable to parse question"));
        assert!(!result.request_id.is_empty());
    }

    #[test]
    fn test_unknown_entities_named_in_explanation() {
        let result = engine().process("is Lassie a pet?");

        assert_eq!(result.result, QuestionResult::DontKnow);
        assert_eq!(
            result.explanation.as_deref(),
            Some("entities not found: pet")
        );
    }

    #[test]
    fn test_validation_runs_before_reflexivity() {
        // "is ghost a ghost?" would be a reflexive NO, but ghost is
        // unknown: the validator answers first.
        let result = engine().process("is ghost a ghost?");

        assert_eq!(result.result, QuestionResult::DontKnow);
        assert_eq!(
            result.explanation.as_deref(),
            Some("entities not found: ghost")
        );
    }

    #[test]
    fn test_mutation_invalidates_cache() {
        let engine = engine();

        let first = engine.process("is Lassie a dog?");
        assert!(!first.cache_hit);
        let second = engine.process("is Lassie a dog?");
        assert!(second.cache_hit);

        engine
            .add_edges(vec![Edge::new(EdgeType::SubclassOf, "cat", "animal")])
            .unwrap();

        let third = engine.process("is Lassie a dog?");
        assert!(!third.cache_hit, "graph mutation must drop the cache");
    }

    #[test]
    fn test_cancelled_query_reports_cancelled() {
        use crate::graph::CancelFlag;

        let engine = engine();
        let cancel = CancelFlag::new();
        cancel.cancel();

        let result = engine.process_with_cancel("is Lassie a dog?", cancel);

        assert_eq!(result.result, QuestionResult::DontKnow);
        assert_eq!(result.explanation.as_deref(), Some("cancelled"));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = EngineConfig::default();
        config.cache.capacity = 0;
        assert!(Engine::new(config).is_err());
    }

    #[test]
    fn test_stats_reflect_graph_and_cache() {
        let engine = engine();
        let _ = engine.process("is Lassie a dog?");
        let _ = engine.process("is Lassie a dog?");

        let stats = engine.stats();
        assert_eq!(stats.entities, 3);
        assert_eq!(stats.edges, 2);
        assert_eq!(stats.cache.hits, 1);
    }
}
