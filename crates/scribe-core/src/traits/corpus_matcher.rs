use crate::errors::ScribeResult;
use crate::models::WildcardSet;

/// Counts corpus records matching a wildcard set.
pub trait ICorpusMatcher: Send + Sync {
    fn count(&self, patterns: &WildcardSet) -> ScribeResult<u64>;
}
