use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

/// Accumulated token → LIKE patterns mapping used to query the corpus.
///
/// Keys are tokens taken from option labels; the set only ever grows.
/// Serializes as a JSON object. Older clients echo an empty accumulator
/// back as `[]`, which reads as an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WildcardRepr")]
pub struct WildcardSet(BTreeMap<String, Vec<String>>);

#[derive(Deserialize)]
#[serde(untagged)]
enum WildcardRepr {
    Map(BTreeMap<String, Vec<String>>),
    List(Vec<IgnoredAny>),
}

impl TryFrom<WildcardRepr> for WildcardSet {
    type Error = String;

    fn try_from(repr: WildcardRepr) -> Result<Self, Self::Error> {
        match repr {
            WildcardRepr::Map(map) => Ok(Self(map)),
            WildcardRepr::List(items) if items.is_empty() => Ok(Self::default()),
            WildcardRepr::List(items) => Err(format!(
                "wildcard set must be an object of token to patterns, got an array of {}",
                items.len()
            )),
        }
    }
}

impl WildcardSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct token keys.
    pub fn token_count(&self) -> usize {
        self.0.len()
    }

    /// Total number of patterns across all tokens.
    pub fn pattern_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.0.contains_key(token)
    }

    pub fn patterns(&self, token: &str) -> Option<&[String]> {
        self.0.get(token).map(Vec::as_slice)
    }

    /// Append patterns under `token`, creating the key when absent.
    pub fn extend_token<I>(&mut self, token: &str, patterns: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.0.entry(token.to_string()).or_default().extend(patterns);
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<String>> {
        self.0.iter()
    }

    /// True when every key of `other` is also a key here.
    pub fn covers_tokens_of(&self, other: &WildcardSet) -> bool {
        other.0.keys().all(|k| self.0.contains_key(k))
    }
}

impl<'a> IntoIterator for &'a WildcardSet {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = btree_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Vec<String>)> for WildcardSet {
    fn from_iter<T: IntoIterator<Item = (String, Vec<String>)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
