//! Golden selection scenario shape.

use std::collections::BTreeMap;

use serde::Deserialize;

use scribe_core::models::{OptionCatalogue, Resolution, UsedSet, WildcardSet};

/// One end-to-end selection case: dictionary and corpus to seed, the request,
/// and what the decision must contain.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectionScenario {
    pub description: String,
    #[serde(default)]
    pub dictionary: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub corpus: Vec<String>,
    pub keywords: String,
    pub options: OptionCatalogue,
    #[serde(default)]
    pub wildcards: WildcardSet,
    #[serde(default)]
    pub used: UsedSet,
    pub expected: ExpectedDecision,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedDecision {
    pub option: String,
    pub max: u64,
    pub resolved_by: Resolution,
    /// Checked only when present.
    #[serde(default)]
    pub summary: Option<BTreeMap<String, u64>>,
    /// Token keys the resulting wildcard set must hold.
    #[serde(default)]
    pub wildcard_tokens: Vec<String>,
}
