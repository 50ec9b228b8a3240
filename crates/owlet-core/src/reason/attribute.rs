//! Attribute reasoning.
//!
//! Attributes inherit downward: from a class to its subclasses and their
//! instances, never upward to superclasses. The walk therefore starts at
//! the attribute, collects the entities that bear it directly, and asks
//! whether the question's head sits below any of them in the hierarchy.

use super::hierarchy::HierarchyReasoner;
use crate::answer::{QueryMetrics, QuestionResult};
use crate::graph::{EdgeType, ExecutionContext, GraphStore};
use crate::question::{Question, QuestionType};
use indexmap::IndexSet;
use std::time::Instant;

/// Resolves `HasAttribute` questions via direct lookup plus hierarchy
/// sub-questions.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeReasoner {
    hierarchy: HierarchyReasoner,
}

impl AttributeReasoner {
    /// Creates an attribute reasoner with its own hierarchy reasoner.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hierarchy: HierarchyReasoner::new(),
        }
    }

    /// Answers "does `head` carry the attribute `tail`?".
    ///
    /// 1. Collect `attribute_parents`: heads of `HasAttribute` edges into
    ///    `tail`, in first-seen store order.
    /// 2. `head` among them is a direct YES.
    /// 3. Otherwise `head` inherits the attribute if it sits below any
    ///    parent: first as a subclass, then as an instance. Sub-questions
    ///    that come back NO (reflexivity, mutual exclusivity) do not refute
    ///    the attribute; the verdict here is YES or DONT_KNOW, never NO.
    ///
    /// `entities_visited` accumulates across sub-queries, counting the
    /// initial incoming lookup as one.
    #[must_use]
    pub fn reason(
        &self,
        store: &GraphStore,
        question: &Question,
        ctx: &ExecutionContext,
    ) -> (QuestionResult, QueryMetrics) {
        let started = Instant::now();
        let mut entities_visited = 1u64;
        let mut depth_reached = 0u32;

        let attribute_parents: IndexSet<String> = store
            .incoming(&question.tail)
            .into_iter()
            .filter(|edge| edge.edge_type() == EdgeType::HasAttribute)
            .map(|edge| edge.head().to_string())
            .collect();

        if attribute_parents.contains(question.head.as_str()) {
            let metrics = QueryMetrics {
                execution_time_ms: started.elapsed().as_secs_f64() * 1000.0,
                entities_visited,
                cache_hit: false,
                depth_reached,
            };
            return (QuestionResult::Yes, metrics);
        }

        for parent in &attribute_parents {
            for question_type in [QuestionType::SubclassOf, QuestionType::InstanceOf] {
                let sub_question = Question::new(question_type, &question.head, parent)
                    .with_request_id(ctx.request_id.clone());
                let (result, sub_metrics) = self.hierarchy.reason(store, &sub_question, ctx);
                entities_visited += sub_metrics.entities_visited;
                depth_reached = depth_reached.max(sub_metrics.depth_reached);

                if result == QuestionResult::Yes {
                    let metrics = QueryMetrics {
                        execution_time_ms: started.elapsed().as_secs_f64() * 1000.0,
                        entities_visited,
                        cache_hit: false,
                        depth_reached,
                    };
                    return (QuestionResult::Yes, metrics);
                }
            }
        }

        let metrics = QueryMetrics {
            execution_time_ms: started.elapsed().as_secs_f64() * 1000.0,
            entities_visited,
            cache_hit: false,
            depth_reached,
        };
        (QuestionResult::DontKnow, metrics)
    }
}
