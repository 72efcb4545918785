use serde::{Deserialize, Serialize};

use super::defaults;

/// Selection engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Seed for the random fallback. `None` draws from OS entropy on every call.
    pub random_seed: Option<u64>,
    /// Keywords text longer than this is rejected as invalid input.
    pub max_keywords_bytes: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            max_keywords_bytes: defaults::DEFAULT_MAX_KEYWORDS_BYTES,
        }
    }
}
