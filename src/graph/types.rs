//! Core type definitions for the graph ADT

use std::fmt;
use std::hash::Hash;

/// Bound for node identifier types.
///
/// Identifiers must be hashable for the adjacency and edge indexes and
/// totally ordered so that `nodes()` and `edges()` have a deterministic
/// order regardless of insertion order. The order is a trait bound, not a
/// runtime property, so the ordering contract is checked at compile time.
///
/// Blanket-implemented; any `Clone + Eq + Ord + Hash + Display + Debug`
/// type qualifies (`String`, integers, ...).
pub trait NodeKey: Clone + Eq + Ord + Hash + fmt::Display + fmt::Debug {}

impl<T: Clone + Eq + Ord + Hash + fmt::Display + fmt::Debug> NodeKey for T {}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Directed {}
    impl Sealed for super::Undirected {}
}

/// Edge-mode strategy selecting directed or undirected insertion semantics.
///
/// Sealed: the two modes below are the complete set. The mode governs
/// insertion symmetry (undirected edges materialize both directions) and
/// which degree queries exist on the concrete graph type.
pub trait EdgeMode: sealed::Sealed {
    /// True when edge (a,b) is distinct from (b,a).
    const DIRECTED: bool;
    /// Type name used in the canonical graph dump header.
    const NAME: &'static str;
}

/// Marker for directed graphs: (a,b) and (b,a) are distinct relations and
/// self-loops are permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directed;

impl EdgeMode for Directed {
    const DIRECTED: bool = true;
    const NAME: &'static str = "DirectedGraph";
}

/// Marker for undirected graphs: one relation per unordered pair, stored as
/// two mirrored directed records; self-loops are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undirected;

impl EdgeMode for Undirected {
    const DIRECTED: bool = false;
    const NAME: &'static str = "UndirectedGraph";
}

/// Tagged key for the combined node/edge lookup operations.
///
/// The graph has one key space with two lookup semantics: a scalar key
/// addresses a node, a pair addresses an edge. The tag makes the dispatch
/// explicit instead of inspecting the key shape at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphKey<Id> {
    /// Node lookup by identifier
    Node(Id),
    /// Edge lookup by (source, target) pair
    Edge(Id, Id),
}

impl<Id: fmt::Display> fmt::Display for GraphKey<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKey::Node(id) => write!(f, "{}", id),
            GraphKey::Edge(a, b) => write!(f, "({},{})", a, b),
        }
    }
}

/// Result of a keyed lookup: the record the key resolved to.
#[derive(Debug, Clone, Copy)]
pub enum GraphEntry<'a, Id> {
    Node(&'a crate::graph::Node<Id>),
    Edge(&'a crate::graph::Edge<Id>),
}

impl<'a, Id> GraphEntry<'a, Id> {
    /// Get the node if this entry resolved to one
    pub fn as_node(&self) -> Option<&'a crate::graph::Node<Id>> {
        match *self {
            GraphEntry::Node(n) => Some(n),
            GraphEntry::Edge(_) => None,
        }
    }

    /// Get the edge if this entry resolved to one
    pub fn as_edge(&self) -> Option<&'a crate::graph::Edge<Id>> {
        match *self {
            GraphEntry::Edge(e) => Some(e),
            GraphEntry::Node(_) => None,
        }
    }
}
