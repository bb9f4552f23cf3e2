//! PageRank over directed graphs
//!
//! Fixed-point iteration with damping and uniform redistribution of
//! dangling-node mass. Runs a fixed number of rounds; there is no
//! convergence check, deliberately, so a given input and iteration count
//! always do the same work.

use crate::graph::DirectedGraph;
use crate::graph::NodeKey;
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use tracing::debug;

/// PageRank configuration
#[derive(Debug, Clone, Copy)]
pub struct PageRankConfig {
    /// Damping factor: probability mass retained through edge-following
    /// versus redistributed uniformly (usually 0.85)
    pub damping_factor: f64,
    /// Number of iterations; every round runs, no early exit
    pub iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            iterations: 40,
        }
    }
}

impl PageRankConfig {
    /// Default damping with an explicit iteration count
    pub fn with_iterations(iterations: usize) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }
}

/// Calculate PageRank for every node of a directed graph.
///
/// Every node starts at `1/N`. Each round computes, from the previous
/// round's frozen snapshot,
///
/// ```text
/// new[v] = (1 - d)/N + d * (Σ old[u]/out_degree(u) + dangling_sum/N)
/// ```
///
/// where the sum runs over edges (u,v) and `dangling_sum` is the mass
/// currently held by nodes without outgoing edges. Folding the dangling
/// mass into the damped term keeps the total at 1.0 every round, for any
/// topology.
///
/// Returns a mapping from every node identifier to its rank after exactly
/// `config.iterations` rounds. An empty graph yields an empty map.
pub fn page_rank<Id: NodeKey>(
    graph: &DirectedGraph<Id>,
    config: PageRankConfig,
) -> HashMap<Id, f64> {
    let n = graph.len();
    if n == 0 {
        return HashMap::new();
    }

    // Dense projection, built once per call: node order is the graph's
    // deterministic node order, incoming edges are indexed up front so a
    // round costs O(N + E) instead of rescanning all edges per target.
    let index_to_id: Vec<&Id> = graph.nodes().map(|node| node.identifier()).collect();
    let mut id_to_index: FxHashMap<&Id, usize> = FxHashMap::default();
    for (idx, &id) in index_to_id.iter().enumerate() {
        id_to_index.insert(id, idx);
    }

    let mut out_degrees = vec![0usize; n];
    let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); n];
    for edge in graph.edges() {
        let source = id_to_index[edge.source()];
        let target = id_to_index[edge.target()];
        out_degrees[source] += 1;
        incoming[target].push(source);
    }

    debug!(nodes = n, iterations = config.iterations, "running pagerank");

    let n_f64 = n as f64;
    let d = config.damping_factor;
    let mut ranks = vec![1.0 / n_f64; n];
    let mut next_ranks = vec![0.0; n];

    for _ in 0..config.iterations {
        let dangling_sum: f64 = out_degrees
            .iter()
            .zip(&ranks)
            .filter(|(&deg, _)| deg == 0)
            .map(|(_, &rank)| rank)
            .sum();

        for v in 0..n {
            let mut rank_sum = 0.0;
            for &u in &incoming[v] {
                rank_sum += ranks[u] / out_degrees[u] as f64;
            }
            next_ranks[v] = (1.0 - d) / n_f64 + d * (rank_sum + dangling_sum / n_f64);
        }

        // Round boundary: all reads above saw the previous snapshot.
        std::mem::swap(&mut ranks, &mut next_ranks);
    }

    let mut result = HashMap::with_capacity(n);
    for (idx, rank) in ranks.into_iter().enumerate() {
        result.insert((*index_to_id[idx]).clone(), rank);
    }
    result
}
