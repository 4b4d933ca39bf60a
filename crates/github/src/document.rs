//! Ordered YAML document tree.
//!
//! Everything the renderer emits is first built as a [`Node`]. Mappings keep
//! insertion order, so the text `serde_yaml` produces from a node is fully
//! determined by the order keys were inserted in.

use actionsmith_core::{Error, Result};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A value in the generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// String scalar
    String(String),
    /// Boolean scalar
    Bool(bool),
    /// Integer scalar
    Integer(i64),
    /// Ordered sequence
    Sequence(Vec<Node>),
    /// Ordered mapping
    Mapping(IndexMap<String, Node>),
}

impl Node {
    /// An empty mapping, emitted as `{}`
    #[must_use]
    pub fn empty_mapping() -> Self {
        Self::Mapping(IndexMap::new())
    }

    /// Build a sequence of string scalars
    pub fn strings<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Sequence(items.into_iter().map(|s| Self::String(s.into())).collect())
    }

    /// The string content, if this is a string scalar
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The entries, if this is a mapping
    #[must_use]
    pub fn as_mapping(&self) -> Option<&IndexMap<String, Self>> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// The items, if this is a sequence
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Look up `key` if this is a mapping
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_mapping().and_then(|map| map.get(key))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u32> for Node {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<IndexMap<String, Node>> for Node {
    fn from(value: IndexMap<String, Node>) -> Self {
        Self::Mapping(value)
    }
}

impl From<IndexMap<String, String>> for Node {
    fn from(value: IndexMap<String, String>) -> Self {
        Self::Mapping(value.into_iter().map(|(k, v)| (k, Self::String(v))).collect())
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Self::Sequence(value)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::String(s) => serializer.serialize_str(s),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

/// Serialize a document to YAML text.
///
/// # Errors
///
/// Returns `Error::Serialization` if the YAML emitter fails.
pub fn to_yaml_string(node: &Node) -> Result<String> {
    serde_yaml::to_string(node).map_err(|e| Error::serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_keeps_insertion_order() {
        let mut map = IndexMap::new();
        map.insert("zeta".to_string(), Node::from("last-letter"));
        map.insert("alpha".to_string(), Node::from(true));
        map.insert("mid".to_string(), Node::from(3u32));

        let yaml = to_yaml_string(&Node::Mapping(map)).unwrap();
        assert_eq!(yaml, "zeta: last-letter\nalpha: true\nmid: 3\n");
    }

    #[test]
    fn test_nested_sequence() {
        let mut map = IndexMap::new();
        map.insert("needs".to_string(), Node::strings(["build", "lint"]));

        let yaml = to_yaml_string(&Node::Mapping(map)).unwrap();
        assert_eq!(yaml, "needs:\n- build\n- lint\n");
    }

    #[test]
    fn test_empty_mapping() {
        let mut map = IndexMap::new();
        map.insert("push".to_string(), Node::empty_mapping());

        let yaml = to_yaml_string(&Node::Mapping(map)).unwrap();
        assert_eq!(yaml, "push: {}\n");
    }

    #[test]
    fn test_accessors() {
        let mut map = IndexMap::new();
        map.insert("name".to_string(), Node::from("CI"));
        let node = Node::Mapping(map);

        assert_eq!(node.get("name").and_then(Node::as_str), Some("CI"));
        assert!(node.get("missing").is_none());
        assert!(Node::from("x").as_mapping().is_none());
    }
}
