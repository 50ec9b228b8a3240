//! String interning for entity names.
//!
//! Ontology graphs repeat the same entity names across many edges. Interning
//! them once keeps the edge arena compact and makes hot-path comparisons an
//! integer equality instead of a string walk.

use rustc_hash::FxHashMap;

/// ID for an interned entity name.
///
/// A `u32` allows ~4 billion distinct entities while keeping edge records
/// small.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EntityId(u32);

impl EntityId {
    /// Returns the raw ID value.
    #[must_use]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Creates an `EntityId` from a raw value.
    #[must_use]
    pub fn from_u32(id: u32) -> Self {
        Self(id)
    }
}

/// Interning table mapping entity names to compact ids and back.
///
/// Names are case-sensitive and whitespace-significant; identity is exact
/// string equality.
#[derive(Debug, Default)]
pub struct EntityTable {
    /// Stored names indexed by `EntityId`.
    names: Vec<String>,
    /// Reverse lookup: name -> `EntityId`.
    ids: FxHashMap<String, EntityId>,
}

impl EntityTable {
    /// Creates a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a name and returns its ID, reusing the existing ID if the
    /// name was seen before.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` distinct names are interned.
    pub fn intern(&mut self, name: &str) -> EntityId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let len = self.names.len();
        assert!(
            len < u32::MAX as usize,
            "EntityTable overflow: cannot intern more than {} entities",
            u32::MAX
        );
        #[allow(clippy::cast_possible_truncation)]
        let id = EntityId(len as u32);
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }

    /// Resolves an ID back to its name, or `None` if the ID is invalid.
    #[must_use]
    pub fn resolve(&self, id: EntityId) -> Option<&str> {
        self.names.get(id.0 as usize).map(String::as_str)
    }

    /// Gets the ID for a name if it exists, without interning.
    #[must_use]
    pub fn get_id(&self, name: &str) -> Option<EntityId> {
        self.ids.get(name).copied()
    }

    /// Checks whether a name is already interned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// Returns the number of distinct names in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no names have been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
