use serde::{Deserialize, Serialize};

/// A keyword store row: one token and its ordered content synonyms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub keyword: String,
    pub content: Vec<String>,
}

impl DictionaryEntry {
    pub fn new(keyword: impl Into<String>, content: Vec<String>) -> Self {
        Self {
            keyword: keyword.into(),
            content,
        }
    }
}
