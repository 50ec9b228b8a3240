//! Strategy dispatch and result assembly.

use super::attribute::AttributeReasoner;
use super::hierarchy::HierarchyReasoner;
use crate::answer::{QueryMetrics, QueryResult, QuestionResult};
use crate::cache::QueryCache;
use crate::config::TraversalConfig;
use crate::graph::{CancelFlag, ExecutionContext, GraphStore};
use crate::question::{Question, QuestionType};
use std::collections::HashMap;
use std::time::Instant;

/// Confidence reported for any fresh inference.
///
/// Edge confidences are metadata; they are not combined along a path.
pub const INFERENCE_CONFIDENCE: f32 = 0.95;

/// A registered reasoning strategy.
///
/// The set of strategies is closed, so dispatch is a tagged enum rather
/// than a trait object.
#[derive(Debug, Clone, Copy)]
pub enum ReasoningStrategy {
    /// Subclass/instance reasoning.
    Hierarchy(HierarchyReasoner),
    /// Attribute reasoning.
    Attribute(AttributeReasoner),
}

impl ReasoningStrategy {
    fn reason(
        &self,
        store: &GraphStore,
        question: &Question,
        ctx: &ExecutionContext,
    ) -> (QuestionResult, QueryMetrics) {
        match self {
            Self::Hierarchy(reasoner) => reasoner.reason(store, question, ctx),
            Self::Attribute(reasoner) => reasoner.reason(store, question, ctx),
        }
    }
}

/// Dispatches questions to reasoning strategies, consulting the result
/// cache first.
#[derive(Debug, Default)]
pub struct ReasoningCoordinator {
    strategies: HashMap<QuestionType, ReasoningStrategy>,
}

impl ReasoningCoordinator {
    /// Creates a coordinator with an empty strategy registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a coordinator with the standard strategy registration:
    /// hierarchy reasoning for subclass and instance questions, attribute
    /// reasoning for attribute questions.
    #[must_use]
    pub fn with_default_strategies() -> Self {
        let mut coordinator = Self::new();
        coordinator.register(
            QuestionType::SubclassOf,
            ReasoningStrategy::Hierarchy(HierarchyReasoner::new()),
        );
        coordinator.register(
            QuestionType::InstanceOf,
            ReasoningStrategy::Hierarchy(HierarchyReasoner::new()),
        );
        coordinator.register(
            QuestionType::HasAttribute,
            ReasoningStrategy::Attribute(AttributeReasoner::new()),
        );
        coordinator
    }

    /// Registers a strategy for a question type, replacing any previous
    /// registration.
    pub fn register(&mut self, question_type: QuestionType, strategy: ReasoningStrategy) {
        self.strategies.insert(question_type, strategy);
    }

    /// Answers a validated question.
    ///
    /// Order of business: cache consult, strategy lookup, bounded
    /// execution, cache insert. Cancelled runs are not cached: their
    /// verdict reflects scheduling, not the graph.
    #[must_use]
    pub fn answer(
        &self,
        store: &GraphStore,
        cache: Option<&QueryCache>,
        question: &Question,
        bounds: &TraversalConfig,
        cancel: Option<CancelFlag>,
    ) -> QueryResult {
        let started = Instant::now();

        if let Some(cache) = cache {
            if let Some(result) = cache.get(question) {
                tracing::debug!(request_id = %question.request_id, %result, "cache hit");
                return QueryResult {
                    result,
                    confidence: 1.0,
                    execution_time_ms: started.elapsed().as_secs_f64() * 1000.0,
                    entities_visited: 0,
                    cache_hit: true,
                    depth_reached: 0,
                    explanation: None,
                    request_id: question.request_id.clone(),
                };
            }
        }

        let Some(strategy) = self.strategies.get(&question.question_type) else {
            tracing::warn!(
                request_id = %question.request_id,
                question_type = %question.question_type,
                "no strategy registered"
            );
            return QueryResult::not_evaluated(
                "unknown question type",
                started.elapsed().as_secs_f64() * 1000.0,
                question.request_id.clone(),
            );
        };

        let mut ctx = ExecutionContext::new(
            bounds.max_depth,
            std::time::Duration::from_secs_f64(bounds.timeout_seconds),
            question.request_id.clone(),
        );
        if let Some(cancel) = cancel {
            ctx = ctx.with_cancel(cancel);
        }

        let (result, metrics) = strategy.reason(store, question, &ctx);

        if ctx.is_cancelled() {
            return QueryResult {
                result: QuestionResult::DontKnow,
                confidence: 0.0,
                execution_time_ms: metrics.execution_time_ms,
                entities_visited: metrics.entities_visited,
                cache_hit: false,
                depth_reached: metrics.depth_reached,
                explanation: Some("cancelled".to_string()),
                request_id: question.request_id.clone(),
            };
        }

        if let Some(cache) = cache {
            cache.put(question, result);
        }

        QueryResult {
            result,
            confidence: INFERENCE_CONFIDENCE,
            execution_time_ms: metrics.execution_time_ms,
            entities_visited: metrics.entities_visited,
            cache_hit: false,
            depth_reached: metrics.depth_reached,
            explanation: None,
            request_id: question.request_id.clone(),
        }
    }
}
