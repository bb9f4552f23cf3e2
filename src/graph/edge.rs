//! Edge record for attributed graphs

use super::attr::{AttrMap, AttrValue};
use super::types::NodeKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A directed edge record: an ordered (source, target) identifier pair plus
/// an attribute map.
///
/// Undirected graphs store one relation as two mirrored records sharing the
/// same attributes; the record itself is always directed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<Id> {
    source: Id,
    target: Id,
    attrs: AttrMap,
}

impl<Id: NodeKey> Edge<Id> {
    /// Create an edge with no attributes
    pub fn new(source: Id, target: Id) -> Self {
        Edge {
            source,
            target,
            attrs: AttrMap::new(),
        }
    }

    /// Create an edge with attributes
    pub fn with_attrs(source: Id, target: Id, attrs: AttrMap) -> Self {
        Edge {
            source,
            target,
            attrs,
        }
    }

    /// Source node identifier (edge goes FROM this node)
    pub fn source(&self) -> &Id {
        &self.source
    }

    /// Target node identifier (edge goes TO this node)
    pub fn target(&self) -> &Id {
        &self.target
    }

    /// The (source, target) identifier pair
    pub fn endpoints(&self) -> (&Id, &Id) {
        (&self.source, &self.target)
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

/// Canonical rendering: an `Edge from node [a] to node [b]` header line
/// followed by one indented line per attribute in sorted-key order. Part of
/// the graph dump contract.
impl<Id: NodeKey> fmt::Display for Edge<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Edge from node [{}] to node [{}]", self.source, self.target)?;
        for (key, value) in &self.attrs {
            writeln!(f, "    {} : {}", key, value)?;
        }
        Ok(())
    }
}
