//! Indexed edge storage.
//!
//! The store keeps an arena of edge records over interned entity ids plus
//! two hash indices (by head and by tail), giving O(1) lookup from either
//! endpoint. It is read-mostly after ingestion; writers must exclude
//! readers, which the engine enforces with an outer `RwLock`.

use super::edge::{Edge, EdgeType};
use super::entity_table::{EntityId, EntityTable};
use crate::error::Result;
use rustc_hash::FxHashMap;
use serde_json::Value;
use std::collections::HashMap;

/// Internal edge record over interned ids.
#[derive(Debug, Clone)]
pub(crate) struct StoredEdge {
    pub(crate) edge_type: EdgeType,
    pub(crate) head: EntityId,
    pub(crate) tail: EntityId,
    pub(crate) confidence: f32,
    pub(crate) metadata: HashMap<String, Value>,
}

/// Edge storage with bidirectional indexing.
///
/// Both indices are kept mutually consistent by construction: every insert
/// updates them together, and duplicate `(edge_type, head, tail)` triples
/// replace the existing record in place without touching the indices.
/// Iteration order over a node's edges is insertion order, so a given
/// snapshot traverses deterministically.
#[derive(Debug, Default)]
pub struct GraphStore {
    /// Interned entity names.
    entities: EntityTable,
    /// All edge records, indexed by slot.
    edges: Vec<StoredEdge>,
    /// Outgoing index: head id -> edge slots.
    by_head: FxHashMap<EntityId, Vec<u32>>,
    /// Incoming index: tail id -> edge slots.
    by_tail: FxHashMap<EntityId, Vec<u32>>,
    /// Deduplication: (edge_type, head, tail) -> edge slot.
    slots: FxHashMap<(EdgeType, EntityId, EntityId), u32>,
}

impl GraphStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a batch of edges.
    ///
    /// Idempotent: a triple seen before replaces the stored confidence and
    /// metadata (latest write wins) without growing the indices. Returns
    /// the number of newly created edges.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidEdge` on the first edge that fails
    /// write-time validation; earlier edges in the batch remain inserted.
    pub fn add_edges(&mut self, edges: Vec<Edge>) -> Result<usize> {
        let mut inserted = 0usize;
        let mut replaced = 0usize;

        for edge in edges {
            edge.validate()?;

            let head = self.entities.intern(edge.head());
            let tail = self.entities.intern(edge.tail());
            let key = (edge.edge_type(), head, tail);

            if let Some(&slot) = self.slots.get(&key) {
                let record = &mut self.edges[slot as usize];
                record.confidence = edge.confidence();
                record.metadata = edge.metadata().clone();
                replaced += 1;
                continue;
            }

            #[allow(clippy::cast_possible_truncation)]
            let slot = self.edges.len() as u32;
            self.edges.push(StoredEdge {
                edge_type: edge.edge_type(),
                head,
                tail,
                confidence: edge.confidence(),
                metadata: edge.metadata().clone(),
            });
            self.by_head.entry(head).or_default().push(slot);
            self.by_tail.entry(tail).or_default().push(slot);
            self.slots.insert(key, slot);
            inserted += 1;
        }

        tracing::debug!(inserted, replaced, "edge batch stored");
        Ok(inserted)
    }

    /// Returns a snapshot of all edges leaving `head`.
    #[must_use]
    pub fn outgoing(&self, head: &str) -> Vec<Edge> {
        self.entities
            .get_id(head)
            .map(|id| self.materialize(self.outgoing_slots(id)))
            .unwrap_or_default()
    }

    /// Returns a snapshot of all edges arriving at `tail`.
    #[must_use]
    pub fn incoming(&self, tail: &str) -> Vec<Edge> {
        self.entities
            .get_id(tail)
            .map(|id| self.materialize(self.incoming_slots(id)))
            .unwrap_or_default()
    }

    /// True iff `name` appears as the head or tail of any edge.
    #[must_use]
    pub fn has_entity(&self, name: &str) -> bool {
        // Entities are only ever interned as edge endpoints, so table
        // membership is endpoint membership.
        self.entities.contains(name)
    }

    /// Number of distinct entities in the graph.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Number of distinct edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Resolves a name to its interned id without interning.
    pub(crate) fn resolve(&self, name: &str) -> Option<EntityId> {
        self.entities.get_id(name)
    }

    /// Resolves an id back to its name.
    ///
    /// # Panics
    ///
    /// Panics if the id did not come from this store; the indices and the
    /// entity table are trusted to be consistent.
    pub(crate) fn name_of(&self, id: EntityId) -> &str {
        self.entities
            .resolve(id)
            .expect("entity id missing from table: store indices out of sync")
    }

    /// Edge slots leaving `head`, in insertion order.
    pub(crate) fn outgoing_slots(&self, head: EntityId) -> &[u32] {
        self.by_head.get(&head).map_or(&[], Vec::as_slice)
    }

    /// Edge slots arriving at `tail`, in insertion order.
    pub(crate) fn incoming_slots(&self, tail: EntityId) -> &[u32] {
        self.by_tail.get(&tail).map_or(&[], Vec::as_slice)
    }

    /// The record stored at `slot`.
    pub(crate) fn record(&self, slot: u32) -> &StoredEdge {
        &self.edges[slot as usize]
    }

    fn materialize(&self, slots: &[u32]) -> Vec<Edge> {
        slots
            .iter()
            .map(|&slot| {
                let record = &self.edges[slot as usize];
                Edge::new(
                    record.edge_type,
                    self.name_of(record.head),
                    self.name_of(record.tail),
                )
                .with_confidence(record.confidence)
                .with_metadata(record.metadata.clone())
            })
            .collect()
    }
}
