//! Nested per-locale string trees
//!
//! A locale tree is either a leaf string or a branch of named children.
//! Source data may also carry numbers, booleans, nulls and sequences.
//! Sequences become branches keyed by index. Scalar values are dropped, so
//! any key that ends on them falls back like a missing key.

use serde::de::{self, Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Separator between the segments of a lookup key
pub const KEY_SEPARATOR: char = '.';

/// One node of a locale tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocaleTree {
    /// A translated string
    Leaf(String),
    /// Named children
    Branch(BTreeMap<String, LocaleTree>),
}

impl Default for LocaleTree {
    fn default() -> Self {
        Self::Branch(BTreeMap::new())
    }
}

impl LocaleTree {
    /// Create a leaf node
    pub fn leaf(text: impl Into<String>) -> Self {
        Self::Leaf(text.into())
    }

    /// Create a branch node from `(segment, child)` pairs
    pub fn branch<K, I>(children: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, LocaleTree)>,
    {
        Self::Branch(
            children
                .into_iter()
                .map(|(segment, child)| (segment.into(), child))
                .collect(),
        )
    }

    /// The string of a leaf node
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Leaf(text) => Some(text),
            Self::Branch(_) => None,
        }
    }

    /// The children of a branch node
    pub fn children(&self) -> Option<&BTreeMap<String, LocaleTree>> {
        match self {
            Self::Leaf(_) => None,
            Self::Branch(children) => Some(children),
        }
    }

    /// Walk the tree one segment at a time.
    ///
    /// Returns `None` as soon as a segment is absent or the walk reaches a
    /// leaf with segments left over; remaining segments are not visited.
    pub fn lookup<'a, I>(&self, segments: I) -> Option<&LocaleTree>
    where
        I: IntoIterator<Item = &'a str>,
    {
        segments
            .into_iter()
            .try_fold(self, |node, segment| match node {
                Self::Branch(children) => children.get(segment),
                Self::Leaf(_) => None,
            })
    }

    /// Resolve a dotted key to a leaf string.
    ///
    /// A key that names a branch resolves to `None`, the same as a key that
    /// names nothing.
    pub fn lookup_str(&self, key: &str) -> Option<&str> {
        self.lookup(key.split(KEY_SEPARATOR))
            .and_then(LocaleTree::as_str)
    }

    /// Every dotted key that resolves to a leaf, sorted
    pub fn leaf_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        if let Self::Branch(children) = self {
            for (segment, child) in children {
                child.collect_leaf_keys(segment.clone(), &mut keys);
            }
        }
        keys.sort();
        keys
    }

    fn collect_leaf_keys(&self, path: String, keys: &mut Vec<String>) {
        match self {
            Self::Leaf(_) => keys.push(path),
            Self::Branch(children) => {
                for (segment, child) in children {
                    child.collect_leaf_keys(format!("{path}{KEY_SEPARATOR}{segment}"), keys);
                }
            }
        }
    }

    /// Number of leaf strings reachable through a key
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Branch(children) => children.values().map(Self::subtree_leaves).sum(),
        }
    }

    fn subtree_leaves(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Branch(children) => children.values().map(Self::subtree_leaves).sum(),
        }
    }
}

/// Shape of translation data as it appears in source files
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNode {
    Text(String),
    Map(BTreeMap<Segment, RawNode>),
    List(Vec<RawNode>),
    Other(IgnoredAny),
}

impl RawNode {
    fn into_tree(self, path: &str) -> Option<LocaleTree> {
        match self {
            Self::Text(text) => Some(LocaleTree::Leaf(text)),
            Self::Map(entries) => Some(LocaleTree::Branch(
                entries
                    .into_iter()
                    .filter_map(|(Segment(segment), raw)| {
                        let child_path = child_path(path, &segment);
                        raw.into_tree(&child_path).map(|child| (segment, child))
                    })
                    .collect(),
            )),
            Self::List(items) => Some(LocaleTree::Branch(
                items
                    .into_iter()
                    .enumerate()
                    .filter_map(|(index, raw)| {
                        let segment = index.to_string();
                        let child_path = child_path(path, &segment);
                        raw.into_tree(&child_path).map(|child| (segment, child))
                    })
                    .collect(),
            )),
            Self::Other(_) => {
                debug!(key = path, "Dropping non-string translation value");
                None
            }
        }
    }
}

/// Mapping key in source data. YAML allows integer, boolean and null keys;
/// they are kept under their textual form.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct Segment(String);

impl<'de> Deserialize<'de> for Segment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SegmentVisitor)
    }
}

struct SegmentVisitor;

impl<'de> de::Visitor<'de> for SegmentVisitor {
    type Value = Segment;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string, integer or boolean mapping key")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Segment, E> {
        Ok(Segment(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Segment, E> {
        Ok(Segment(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Segment, E> {
        Ok(Segment(value.to_string()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Segment, E> {
        Ok(Segment(value.to_string()))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Segment, E> {
        Ok(Segment(value.to_string()))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Segment, E> {
        Ok(Segment(value.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Segment, E> {
        Ok(Segment("null".to_string()))
    }
}

fn child_path(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        segment.to_string()
    } else {
        format!("{parent}{KEY_SEPARATOR}{segment}")
    }
}

impl<'de> Deserialize<'de> for LocaleTree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawNode::deserialize(deserializer)?
            .into_tree("")
            .ok_or_else(|| de::Error::custom("translation data must be a string, mapping or sequence"))
    }
}
