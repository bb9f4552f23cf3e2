//! In-memory attributed graph storage
//!
//! One core structure serves both graph variants: the edge-mode marker
//! selects insertion symmetry at compile time, and the degree queries that
//! only make sense for one variant are inherent impls on the concrete mode.

use super::attr::AttrMap;
use super::edge::Edge;
use super::node::Node;
use super::types::{Directed, EdgeMode, GraphEntry, GraphKey, NodeKey, Undirected};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError<Id: fmt::Display + fmt::Debug> {
    #[error("Node {0} already exists")]
    DuplicateNode(Id),

    #[error("Node {0} not found")]
    NodeNotFound(Id),

    #[error("Edge ({0},{1}) already exists")]
    DuplicateEdge(Id, Id),

    #[error("Edge ({0},{1}) not found")]
    EdgeNotFound(Id, Id),

    #[error("Self-loops are not allowed in undirected graphs: {0}")]
    SelfLoop(Id),

    #[error("Key {0} not found")]
    KeyNotFound(GraphKey<Id>),
}

pub type GraphResult<T, Id> = Result<T, GraphError<Id>>;

/// An attributed graph: nodes, edge records and an adjacency index.
///
/// Storage layout:
/// - `nodes`: identifier -> Node, in a `BTreeMap` so `nodes()` iterates in
///   ascending identifier order structurally
/// - `edges`: edge records in insertion order
/// - `adjacency`: identifier -> directly reachable neighbor identifiers in
///   insertion order (out-degree and traversal)
/// - `edge_index`: source -> target -> position in `edges`, for O(1)
///   duplicate checks and lookups
///
/// The graph has two phases: construction (`add_node` / `add_edge`) and
/// queries. No removal or in-place mutation is offered; every failed
/// operation leaves the graph exactly as it was.
#[derive(Debug, Clone)]
pub struct Graph<Id, M: EdgeMode> {
    nodes: BTreeMap<Id, Node<Id>>,
    edges: Vec<Edge<Id>>,
    adjacency: FxHashMap<Id, Vec<Id>>,
    edge_index: FxHashMap<Id, FxHashMap<Id, usize>>,
    _mode: PhantomData<M>,
}

/// Directed variant: (a,b) and (b,a) are distinct, self-loops permitted,
/// `in_degree` / `out_degree` available.
pub type DirectedGraph<Id> = Graph<Id, Directed>;

/// Undirected variant: one relation per unordered pair stored as two
/// mirrored records, self-loops rejected, `degree` available.
pub type UndirectedGraph<Id> = Graph<Id, Undirected>;

impl<Id: NodeKey, M: EdgeMode> Graph<Id, M> {
    /// Create an empty graph
    pub fn new() -> Self {
        Graph {
            nodes: BTreeMap::new(),
            edges: Vec::new(),
            adjacency: FxHashMap::default(),
            edge_index: FxHashMap::default(),
            _mode: PhantomData,
        }
    }

    /// Number of nodes in the graph
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edge records (an undirected relation counts as two)
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Insert a node with no attributes.
    ///
    /// Fails with [`GraphError::DuplicateNode`] if the identifier is taken.
    pub fn add_node(&mut self, id: Id) -> GraphResult<(), Id> {
        self.add_node_with(id, AttrMap::new())
    }

    /// Insert a node with attributes.
    ///
    /// Fails with [`GraphError::DuplicateNode`] if the identifier is taken.
    /// On success the node also gets an empty adjacency entry.
    pub fn add_node_with(&mut self, id: Id, attrs: AttrMap) -> GraphResult<(), Id> {
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        self.adjacency.insert(id.clone(), Vec::new());
        self.nodes.insert(id.clone(), Node::with_attrs(id, attrs));
        Ok(())
    }

    /// Look up a node by identifier.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if absent.
    pub fn node(&self, id: &Id) -> GraphResult<&Node<Id>, Id> {
        self.nodes
            .get(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.clone()))
    }

    /// All nodes in ascending identifier order
    pub fn nodes(&self) -> impl Iterator<Item = &Node<Id>> {
        self.nodes.values()
    }

    /// Insert an edge with no attributes. See [`Graph::add_edge_with`].
    pub fn add_edge(&mut self, source: Id, target: Id) -> GraphResult<(), Id> {
        self.add_edge_with(source, target, AttrMap::new())
    }

    /// Insert an edge with attributes.
    ///
    /// Fails with [`GraphError::NodeNotFound`] when either endpoint is
    /// missing and [`GraphError::DuplicateEdge`] when the relation already
    /// exists; in the undirected mode both directions count as the same
    /// relation and [`GraphError::SelfLoop`] rejects identical endpoints.
    ///
    /// All checks run before any mutation: on failure the graph is
    /// untouched, and the undirected dual insertion cannot end up half done.
    pub fn add_edge_with(&mut self, source: Id, target: Id, attrs: AttrMap) -> GraphResult<(), Id> {
        if !M::DIRECTED && source == target {
            return Err(GraphError::SelfLoop(source));
        }
        if !self.nodes.contains_key(&source) {
            return Err(GraphError::NodeNotFound(source));
        }
        if !self.nodes.contains_key(&target) {
            return Err(GraphError::NodeNotFound(target));
        }
        // Undirected insertion indexes both directions, so one probe covers
        // the either-direction duplicate rule as well.
        if self.indexed(&source, &target) {
            return Err(GraphError::DuplicateEdge(source, target));
        }

        if M::DIRECTED {
            self.insert_record(Edge::with_attrs(source, target, attrs));
        } else {
            let mirror = Edge::with_attrs(target.clone(), source.clone(), attrs.clone());
            self.insert_record(Edge::with_attrs(source, target, attrs));
            self.insert_record(mirror);
        }
        Ok(())
    }

    /// Look up the edge record for an ordered (source, target) pair.
    ///
    /// Fails with [`GraphError::EdgeNotFound`] on a miss. Undirected graphs
    /// hold both directions, so either argument order resolves to the
    /// correspondingly-directed record.
    pub fn edge(&self, source: &Id, target: &Id) -> GraphResult<&Edge<Id>, Id> {
        self.edge_index
            .get(source)
            .and_then(|targets| targets.get(target))
            .map(|&pos| &self.edges[pos])
            .ok_or_else(|| GraphError::EdgeNotFound(source.clone(), target.clone()))
    }

    /// All edge records in lexicographic (source, target) order
    pub fn edges(&self) -> Vec<&Edge<Id>> {
        let mut sorted: Vec<&Edge<Id>> = self.edges.iter().collect();
        sorted.sort_by(|a, b| a.endpoints().cmp(&b.endpoints()));
        sorted
    }

    /// Whether a node with this identifier exists
    pub fn contains_node(&self, id: &Id) -> bool {
        self.nodes.contains_key(id)
    }

    /// Whether an edge record for this ordered pair exists
    pub fn contains_edge(&self, source: &Id, target: &Id) -> bool {
        self.indexed(source, target)
    }

    /// Keyed membership test: a node key dispatches to node lookup, an edge
    /// key to edge lookup.
    pub fn contains(&self, key: &GraphKey<Id>) -> bool {
        match key {
            GraphKey::Node(id) => self.contains_node(id),
            GraphKey::Edge(source, target) => self.contains_edge(source, target),
        }
    }

    /// Keyed lookup counterpart of [`Graph::contains`].
    ///
    /// Fails with [`GraphError::KeyNotFound`] carrying the original key, so
    /// a miss in either key space reports uniformly.
    pub fn get(&self, key: &GraphKey<Id>) -> GraphResult<GraphEntry<'_, Id>, Id> {
        match key {
            GraphKey::Node(id) => self.node(id).map(GraphEntry::Node),
            GraphKey::Edge(source, target) => self.edge(source, target).map(GraphEntry::Edge),
        }
        .map_err(|_| GraphError::KeyNotFound(key.clone()))
    }

    /// Insertion-ordered neighbor identifiers for a node
    pub fn neighbors(&self, id: &Id) -> GraphResult<&[Id], Id> {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::NodeNotFound(id.clone()))
    }

    fn indexed(&self, source: &Id, target: &Id) -> bool {
        self.edge_index
            .get(source)
            .is_some_and(|targets| targets.contains_key(target))
    }

    fn insert_record(&mut self, edge: Edge<Id>) {
        let (source, target) = (edge.source().clone(), edge.target().clone());
        self.edge_index
            .entry(source.clone())
            .or_default()
            .insert(target.clone(), self.edges.len());
        self.edges.push(edge);
        // adjacency entry exists: endpoints were checked before insertion
        if let Some(list) = self.adjacency.get_mut(&source) {
            list.push(target);
        }
    }
}

impl<Id: NodeKey> Graph<Id, Undirected> {
    /// Number of adjacency entries for a node.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if absent.
    pub fn degree(&self, id: &Id) -> GraphResult<usize, Id> {
        self.neighbors(id).map(<[Id]>::len)
    }
}

impl<Id: NodeKey> Graph<Id, Directed> {
    /// Number of edges arriving at a node, computed by an O(E) edge scan.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if absent. Callers needing
    /// repeated in-degree queries should build their own index.
    pub fn in_degree(&self, id: &Id) -> GraphResult<usize, Id> {
        if !self.nodes.contains_key(id) {
            return Err(GraphError::NodeNotFound(id.clone()));
        }
        Ok(self.edges.iter().filter(|e| e.target() == id).count())
    }

    /// Number of edges leaving a node (adjacency-list length).
    ///
    /// Fails with [`GraphError::NodeNotFound`] if absent.
    pub fn out_degree(&self, id: &Id) -> GraphResult<usize, Id> {
        self.neighbors(id).map(<[Id]>::len)
    }
}

impl<Id: NodeKey, M: EdgeMode> Default for Graph<Id, M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical dump: the variant name, every node, then every edge, in the
/// global deterministic order with sorted attribute keys. Other components
/// rely on this for snapshot testing.
impl<Id: NodeKey, M: EdgeMode> fmt::Display for Graph<Id, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", M::NAME)?;
        for node in self.nodes() {
            write!(f, "{}", node)?;
        }
        for edge in self.edges() {
            write!(f, "{}", edge)?;
        }
        Ok(())
    }
}
