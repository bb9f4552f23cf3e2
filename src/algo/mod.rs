//! Graph algorithms
//!
//! Algorithms consume the graph through its public contract only; a dense
//! projection of the topology is built per call so the per-round work stays
//! O(N + E).

pub mod pagerank;

pub use pagerank::{page_rank, PageRankConfig};
