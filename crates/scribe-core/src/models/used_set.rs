use std::collections::{btree_set, BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Labels already selected in the current session.
///
/// Serializes as a JSON array. Also accepts the `{label: label}` object shape
/// older clients send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UsedRepr")]
pub struct UsedSet(BTreeSet<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum UsedRepr {
    List(Vec<String>),
    Map(BTreeMap<String, String>),
}

impl From<UsedRepr> for UsedSet {
    fn from(repr: UsedRepr) -> Self {
        match repr {
            UsedRepr::List(labels) => labels.into_iter().collect(),
            UsedRepr::Map(map) => map.into_values().collect(),
        }
    }
}

impl UsedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a label. Returns false when it was already present.
    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        self.0.insert(label.into())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a UsedSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for UsedSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
