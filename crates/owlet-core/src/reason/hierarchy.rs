//! Subclass and instance reasoning.

use crate::answer::{QueryMetrics, QuestionResult};
use crate::graph::{find_path, EdgeType, ExecutionContext, GraphStore};
use crate::question::{Question, QuestionType};

/// Resolves subclass and instance questions by climbing the class
/// hierarchy.
///
/// Reflexivity is settled without touching the store: a class is a type of
/// itself (per the OWL reference), an entity is not an instance of itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct HierarchyReasoner;

impl HierarchyReasoner {
    /// Creates a hierarchy reasoner.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Answers a subclass or instance question.
    #[must_use]
    pub fn reason(
        &self,
        store: &GraphStore,
        question: &Question,
        ctx: &ExecutionContext,
    ) -> (QuestionResult, QueryMetrics) {
        if question.head == question.tail {
            let result = if question.question_type == QuestionType::SubclassOf {
                QuestionResult::Yes
            } else {
                QuestionResult::No
            };
            return (result, QueryMetrics::default());
        }

        let edge_type = match question.question_type {
            QuestionType::SubclassOf => EdgeType::SubclassOf,
            QuestionType::InstanceOf => EdgeType::InstanceOf,
            QuestionType::HasAttribute => EdgeType::HasAttribute,
        };
        find_path(store, &question.head, &question.tail, edge_type, ctx)
    }
}
