//! Entity existence validation.
//!
//! Runs before any reasoning: a question about an entity the graph has
//! never seen is open-world ignorance (`DONT_KNOW` with confidence 0), not
//! a refutation. This ordering also scopes the reflexive-instance `NO` to
//! known entities.

use crate::graph::GraphStore;

/// Confirms both endpoints of a question exist in the graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityValidator;

impl EntityValidator {
    /// Creates a validator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// True iff both `head` and `tail` are known to the store.
    #[must_use]
    pub fn entities_exist(&self, store: &GraphStore, head: &str, tail: &str) -> bool {
        store.has_entity(head) && store.has_entity(tail)
    }

    /// Names the endpoints the store does not know, in question order.
    #[must_use]
    pub fn missing_entities(&self, store: &GraphStore, head: &str, tail: &str) -> Vec<String> {
        let mut missing = Vec::new();
        if !store.has_entity(head) {
            missing.push(head.to_string());
        }
        if !store.has_entity(tail) && tail != head {
            missing.push(tail.to_string());
        }
        missing
    }
}
