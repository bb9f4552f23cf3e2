//! Rank report formatter
//!
//! Renders a rank mapping as a deterministically ordered, truncated listing
//! with a final checksum line. Ordering is by descending rank rounded to
//! five decimal places, ties broken by descending identifier, so equal-rank
//! runs print the same way on every run.

use crate::graph::NodeKey;
use std::collections::HashMap;
use std::fmt::Write;
use std::io;

/// Rank rounded to the 5 decimal places the listing prints, so ordering
/// agrees with what the reader sees.
fn round5(rank: f64) -> f64 {
    (rank * 1e5).round() / 1e5
}

/// Identifiers in report order: descending (rounded rank, identifier).
pub fn ranked_ids<Id: NodeKey>(ranks: &HashMap<Id, f64>) -> Vec<&Id> {
    let mut ids: Vec<&Id> = ranks.keys().collect();
    ids.sort_by(|a, b| {
        round5(ranks[*b])
            .total_cmp(&round5(ranks[*a]))
            .then_with(|| b.cmp(a))
    });
    ids
}

/// Format a rank mapping as the canonical report.
///
/// At most `max_nodes` `{id}: {rank}` lines (a maximum of the node count or
/// more prints everything), a literal `...` line when the listing was
/// truncated, and a `Sum:` line over all ranks last. Ranks print with five
/// decimal places.
pub fn format_ranks<Id: NodeKey>(ranks: &HashMap<Id, f64>, max_nodes: usize) -> String {
    let shown = if max_nodes >= ranks.len() {
        ranks.len()
    } else {
        max_nodes
    };

    let ids = ranked_ids(ranks);
    let mut out = String::new();
    for id in &ids[..shown] {
        // infallible: writing to a String
        let _ = writeln!(out, "{}: {:.5}", id, ranks[*id]);
    }
    if shown < ranks.len() {
        out.push_str("...\n");
    }
    let total: f64 = ranks.values().sum();
    let _ = writeln!(out, "Sum: {:.5}", total);
    out
}

/// Write the canonical report to an `io::Write` sink.
///
/// Same output as [`format_ranks`], for callers streaming straight to
/// stdout or a file.
pub fn write_ranks<Id: NodeKey, W: io::Write>(
    writer: &mut W,
    ranks: &HashMap<Id, f64>,
    max_nodes: usize,
) -> io::Result<()> {
    writer.write_all(format_ranks(ranks, max_nodes).as_bytes())
}
