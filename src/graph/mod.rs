//! Attributed graph ADT
//!
//! This module implements the graph data model:
//! - Nodes and edges carrying string-keyed attribute maps
//! - A shared core store with compile-time directed/undirected edge modes
//! - Uniqueness, referential and ordering invariants enforced at insertion
//! - Deterministic `nodes()` / `edges()` ordering and a canonical dump

pub mod attr;
pub mod edge;
pub mod node;
pub mod store;
pub mod types;

// Re-export main types
pub use attr::{attrs, AttrMap, AttrValue};
pub use edge::Edge;
pub use node::Node;
pub use store::{DirectedGraph, Graph, GraphError, GraphResult, UndirectedGraph};
pub use types::{Directed, EdgeMode, GraphEntry, GraphKey, NodeKey, Undirected};
