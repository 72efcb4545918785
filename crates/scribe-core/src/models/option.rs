use std::collections::HashSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{ScribeError, ScribeResult};

/// A candidate writing template: an opaque id and the label text used both
/// for display and as a scoring source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingOption {
    pub id: String,
    pub label: String,
}

impl WritingOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Ordered option catalogue with unique ids.
///
/// Scan order is insertion order and decides ties during selection.
/// On the wire the catalogue is a JSON object `{ id: label }`, read and
/// written in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionCatalogue {
    options: Vec<WritingOption>,
}

impl OptionCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalogue, rejecting duplicate ids.
    pub fn from_options(options: Vec<WritingOption>) -> ScribeResult<Self> {
        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if !seen.insert(option.id.as_str()) {
                return Err(duplicate_id(&option.id));
            }
        }
        Ok(Self { options })
    }

    /// Build a catalogue from `(id, label)` pairs in order.
    pub fn from_pairs<I, K, V>(pairs: I) -> ScribeResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut catalogue = Self::new();
        for (id, label) in pairs {
            catalogue.push(id, label)?;
        }
        Ok(catalogue)
    }

    /// Append an option at the end of the scan order.
    pub fn push(&mut self, id: impl Into<String>, label: impl Into<String>) -> ScribeResult<()> {
        let id = id.into();
        if self.contains_id(&id) {
            return Err(duplicate_id(&id));
        }
        self.options.push(WritingOption::new(id, label));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WritingOption> {
        self.options.get(index)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&WritingOption> {
        self.options.iter().find(|o| o.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.get_by_id(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WritingOption> {
        self.options.iter()
    }

    pub fn as_slice(&self) -> &[WritingOption] {
        &self.options
    }
}

fn duplicate_id(id: &str) -> ScribeError {
    ScribeError::invalid_input(format!("duplicate option id: {id}"))
}

impl<'a> IntoIterator for &'a OptionCatalogue {
    type Item = &'a WritingOption;
    type IntoIter = std::slice::Iter<'a, WritingOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}

impl Serialize for OptionCatalogue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.options.len()))?;
        for option in &self.options {
            map.serialize_entry(&option.id, &option.label)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for OptionCatalogue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogueVisitor)
    }
}

struct CatalogueVisitor;

impl<'de> Visitor<'de> for CatalogueVisitor {
    type Value = OptionCatalogue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of option id to label")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut catalogue = OptionCatalogue::new();
        while let Some((id, label)) = access.next_entry::<String, String>()? {
            catalogue
                .push(id, label)
                .map_err(<A::Error as serde::de::Error>::custom)?;
        }
        Ok(catalogue)
    }
}
