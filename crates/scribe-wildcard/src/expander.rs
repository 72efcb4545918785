//! WildcardExpander: label → token lookups → decorated synonym patterns.

use scribe_core::config::{PatternMode, WildcardConfig};
use scribe_core::errors::{ScribeError, ScribeResult};
use scribe_core::models::{UsedSet, WildcardSet};
use scribe_core::traits::IKeywordLookup;
use scribe_observability::expansion_span;
use tracing::{debug, trace};

use crate::tokenizer::{is_lookup_candidate, tokenize};
use crate::variants::synonym_patterns;

/// Expands option labels into LIKE patterns using the keyword dictionary.
pub struct WildcardExpander<'a> {
    lookup: &'a dyn IKeywordLookup,
    mode: PatternMode,
}

impl<'a> WildcardExpander<'a> {
    pub fn new(lookup: &'a dyn IKeywordLookup, mode: PatternMode) -> Self {
        Self { lookup, mode }
    }

    pub fn from_config(lookup: &'a dyn IKeywordLookup, config: &WildcardConfig) -> Self {
        Self::new(lookup, config.pattern_mode)
    }

    pub fn mode(&self) -> PatternMode {
        self.mode
    }

    /// Expand `label` on top of `wildcards`.
    ///
    /// The returned set holds every key and pattern of `wildcards` plus one
    /// key per newly matched token. Tokens shorter than three bytes,
    /// tokens already present as keys, and tokens in `used` never reach the
    /// dictionary.
    pub fn expand(
        &self,
        label: &str,
        wildcards: &WildcardSet,
        used: &UsedSet,
    ) -> ScribeResult<WildcardSet> {
        let _span = expansion_span!(label).entered();
        let mut expanded = wildcards.clone();

        for token in tokenize(label) {
            if !is_lookup_candidate(&token) {
                trace!(%token, "token too short");
                continue;
            }
            if expanded.contains_token(&token) || used.contains(&token) {
                trace!(%token, "token already known");
                continue;
            }

            let entry = self
                .lookup
                .lookup(&token, used)
                .map_err(|e| ScribeError::from_dependency("keyword_lookup", e))?;
            let Some(entry) = entry else {
                trace!(%token, "no dictionary entry");
                continue;
            };
            if entry.content.is_empty() {
                continue;
            }

            let patterns: Vec<String> = entry
                .content
                .iter()
                .flat_map(|synonym| synonym_patterns(synonym, self.mode))
                .collect();
            debug!(
                %token,
                synonyms = entry.content.len(),
                patterns = patterns.len(),
                "token expanded"
            );
            expanded.extend_token(&token, patterns);
        }

        Ok(expanded)
    }
}
