//! Typed ontology graph: edges, interned entities, indexed storage, and
//! the bounded BFS traversal the reasoners are built on.
//!
//! # Example
//!
//! ```rust
//! use owlet_core::{Edge, EdgeType, GraphStore};
//!
//! let mut store = GraphStore::new();
//! store.add_edges(vec![
//!     Edge::new(EdgeType::SubclassOf, "hemlock", "plant"),
//!     Edge::new(EdgeType::HasAttribute, "hemlock", "poisonous"),
//! ])?;
//!
//! assert!(store.has_entity("poisonous"));
//! assert_eq!(store.outgoing("hemlock").len(), 2);
//! # Ok::<(), owlet_core::Error>(())
//! ```

mod edge;
mod entity_table;
mod store;
mod traversal;


pub use edge::{Edge, EdgeType};
pub use entity_table::{EntityId, EntityTable};
pub use store::GraphStore;
pub use traversal::{
    find_path, CancelFlag, ExecutionContext, DEFAULT_MAX_DEPTH, DEFAULT_TIMEOUT,
};
