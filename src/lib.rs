//! Graphrank
//!
//! An attributed-graph ADT with directed and undirected variants, plus an
//! iterative PageRank over the directed variant.
//!
//! The graph enforces its invariants at insertion time — unique node
//! identifiers, edges only between existing nodes, one relation per
//! (ordered or unordered) pair, no undirected self-loops — and guarantees
//! deterministic `nodes()` / `edges()` ordering for reproducible output.
//! PageRank runs a fixed number of rounds over a frozen per-round snapshot,
//! redistributing dangling-node mass uniformly so the ranks always sum
//! to 1.0.
//!
//! # Example
//!
//! ```rust
//! use graphrank::algo::{page_rank, PageRankConfig};
//! use graphrank::graph::DirectedGraph;
//!
//! let mut graph = DirectedGraph::new();
//! for id in 0u32..3 {
//!     graph.add_node(id).unwrap();
//! }
//! graph.add_edge(0, 1).unwrap();
//! graph.add_edge(1, 2).unwrap();
//! graph.add_edge(2, 0).unwrap();
//!
//! let ranks = page_rank(&graph, PageRankConfig::default());
//! let total: f64 = ranks.values().sum();
//! assert!((total - 1.0).abs() < 1e-6);
//! ```

pub mod algo;
pub mod graph;
pub mod loader;
pub mod report;

pub use algo::{page_rank, PageRankConfig};
pub use graph::{
    AttrMap, AttrValue, DirectedGraph, Edge, Graph, GraphError, GraphKey, GraphResult, Node,
    UndirectedGraph,
};
pub use loader::{read_graph_from_csv, LoadError};
pub use report::{format_ranks, ranked_ids, write_ranks};

/// Crate version string
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
