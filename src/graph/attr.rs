//! Attribute value types for graph nodes and edges

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Attribute value supporting a closed set of loosely-typed payloads.
///
/// Attributes are opaque to the graph itself: it stores and renders them
/// but never interprets or mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl AttrValue {
    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    /// Get string value if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get integer value if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttrValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get float value if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttrValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get boolean value if this is a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            AttrValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::String(_) => "String",
            AttrValue::Integer(_) => "Integer",
            AttrValue::Float(_) => "Float",
            AttrValue::Boolean(_) => "Boolean",
            AttrValue::Null => "Null",
        }
    }
}

/// Renders the raw payload. Strings are unquoted: the canonical graph dump
/// prints attribute values as-is.
impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::String(s) => write!(f, "{}", s),
            AttrValue::Integer(i) => write!(f, "{}", i),
            AttrValue::Float(fl) => write!(f, "{}", fl),
            AttrValue::Boolean(b) => write!(f, "{}", b),
            AttrValue::Null => write!(f, "null"),
        }
    }
}

// Convenience conversions
impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::String(s)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::String(s.to_string())
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        AttrValue::Integer(i)
    }
}

impl From<i32> for AttrValue {
    fn from(i: i32) -> Self {
        AttrValue::Integer(i as i64)
    }
}

impl From<f64> for AttrValue {
    fn from(f: f64) -> Self {
        AttrValue::Float(f)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Boolean(b)
    }
}

/// Attribute map for nodes and edges.
///
/// Backed by a `BTreeMap` so iteration is always in sorted-key order, which
/// the canonical dump format requires.
pub type AttrMap = BTreeMap<String, AttrValue>;

/// Build an [`AttrMap`] from `(key, value)` pairs.
///
/// ```
/// use graphrank::graph::attrs;
/// let m = attrs([("airport_name", "DTW"), ("city", "Detroit")]);
/// assert_eq!(m.len(), 2);
/// ```
pub fn attrs<K, V, I>(pairs: I) -> AttrMap
where
    K: Into<String>,
    V: Into<AttrValue>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_value_types() {
        assert_eq!(AttrValue::String("test".to_string()).type_name(), "String");
        assert_eq!(AttrValue::Integer(42).type_name(), "Integer");
        assert_eq!(AttrValue::Float(3.25).type_name(), "Float");
        assert_eq!(AttrValue::Boolean(true).type_name(), "Boolean");
        assert_eq!(AttrValue::Null.type_name(), "Null");
        assert!(AttrValue::Null.is_null());
    }

    #[test]
    fn test_attr_value_conversions() {
        let string_attr: AttrValue = "hello".into();
        assert_eq!(string_attr.as_str(), Some("hello"));

        let int_attr: AttrValue = 42i64.into();
        assert_eq!(int_attr.as_integer(), Some(42));

        let float_attr: AttrValue = 2.5.into();
        assert_eq!(float_attr.as_float(), Some(2.5));

        let bool_attr: AttrValue = true.into();
        assert_eq!(bool_attr.as_boolean(), Some(true));
    }

    #[test]
    fn test_display_is_unquoted() {
        assert_eq!(format!("{}", AttrValue::from("DTW")), "DTW");
        assert_eq!(format!("{}", AttrValue::from(8i64)), "8");
        assert_eq!(format!("{}", AttrValue::from(true)), "true");
        assert_eq!(format!("{}", AttrValue::Null), "null");
    }

    #[test]
    fn test_attrs_builder_sorts_keys() {
        let m = attrs([("b", "2"), ("a", "1"), ("c", "3")]);
        let keys: Vec<&str> = m.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }
}
