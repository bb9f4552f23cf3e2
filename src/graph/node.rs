//! Node record for attributed graphs

use super::attr::{AttrMap, AttrValue};
use super::types::NodeKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A node: an identifier plus an attribute map.
///
/// Identity is the identifier alone; two nodes with the same identifier are
/// the same node. Nodes are immutable once added to a graph, so there are
/// no setters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node<Id> {
    id: Id,
    attrs: AttrMap,
}

impl<Id: NodeKey> Node<Id> {
    /// Create a node with no attributes
    pub fn new(id: Id) -> Self {
        Node {
            id,
            attrs: AttrMap::new(),
        }
    }

    /// Create a node with attributes
    pub fn with_attrs(id: Id, attrs: AttrMap) -> Self {
        Node { id, attrs }
    }

    /// The node's identifier
    pub fn identifier(&self) -> &Id {
        &self.id
    }

    /// All attributes, keyed by name
    pub fn attributes(&self) -> &AttrMap {
        &self.attrs
    }

    /// Get a single attribute value
    pub fn attribute(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }
}

impl<Id: PartialEq> PartialEq for Node<Id> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<Id: Eq> Eq for Node<Id> {}

impl<Id: std::hash::Hash> std::hash::Hash for Node<Id> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Canonical rendering: a `Node [id]` header line followed by one indented
/// line per attribute in sorted-key order. Part of the graph dump contract.
impl<Id: NodeKey> fmt::Display for Node<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Node [{}]", self.id)?;
        for (key, value) in &self.attrs {
            writeln!(f, "    {} : {}", key, value)?;
        }
        Ok(())
    }
}
