use std::collections::BTreeMap;

use crate::errors::ScribeResult;

/// Persistence of "write" records keyed by the current keyword.
pub trait IWriteStore: Send + Sync {
    /// Upsert `fields` on the record identified by `key`.
    fn update(&self, key: &str, fields: &BTreeMap<String, String>) -> ScribeResult<()>;
}
