use crate::errors::ScribeResult;
use crate::models::{DictionaryEntry, UsedSet};

/// Keyword dictionary lookup.
pub trait IKeywordLookup: Send + Sync {
    /// Find the dictionary entry for `token`. Synonyms matching a label in
    /// `excluded` are left out; `Ok(None)` means "not found".
    fn lookup(&self, token: &str, excluded: &UsedSet) -> ScribeResult<Option<DictionaryEntry>>;
}
