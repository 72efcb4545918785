//! SelectionEngine runs the selection pipeline:
//! name scoring → corpus scoring → random fallback → used-set bookkeeping.

use std::collections::BTreeMap;

use scribe_core::config::{ScribeConfig, SelectionConfig, WildcardConfig};
use scribe_core::errors::{ScribeError, ScribeResult};
use scribe_core::models::{Decision, OptionCatalogue, Resolution, UsedSet, WildcardSet};
use scribe_core::traits::{ICorpusMatcher, IKeywordLookup};
use scribe_observability::selection_span;
use scribe_wildcard::WildcardExpander;
use tracing::{debug, info};

use crate::fallback;
use crate::scoring::{best_by_name, score_by_corpus};

/// The selection engine. Holds its collaborators and config only; session
/// state (`wildcards`, `used`) goes in as arguments and comes back in the
/// [`Decision`].
pub struct SelectionEngine<'a> {
    lookup: &'a dyn IKeywordLookup,
    corpus: &'a dyn ICorpusMatcher,
    wildcard: WildcardConfig,
    selection: SelectionConfig,
}

impl<'a> SelectionEngine<'a> {
    pub fn new(
        lookup: &'a dyn IKeywordLookup,
        corpus: &'a dyn ICorpusMatcher,
        config: &ScribeConfig,
    ) -> Self {
        Self {
            lookup,
            corpus,
            wildcard: config.wildcard.clone(),
            selection: config.selection.clone(),
        }
    }

    /// Expander configured the same way this engine's corpus phase uses it.
    pub fn expander(&self) -> WildcardExpander<'a> {
        WildcardExpander::from_config(self.lookup, &self.wildcard)
    }

    /// Reject input the pipeline must never see. Runs before any dependency call.
    pub fn validate_keywords(&self, keywords: &str) -> ScribeResult<()> {
        if keywords.contains('\0') {
            return Err(ScribeError::invalid_input(
                "keywords text contains a NUL character",
            ));
        }
        if keywords.len() > self.selection.max_keywords_bytes {
            return Err(ScribeError::invalid_input(format!(
                "keywords text is {} bytes, limit is {}",
                keywords.len(),
                self.selection.max_keywords_bytes
            )));
        }
        Ok(())
    }

    /// Choose one option for `keywords`.
    ///
    /// Always returns an option from `options` unless the input is invalid or
    /// a collaborator fails. The caller's `wildcards` and `used` are left
    /// untouched; their successors are in the returned decision.
    pub fn select(
        &self,
        keywords: &str,
        options: &OptionCatalogue,
        wildcards: &WildcardSet,
        used: &UsedSet,
    ) -> ScribeResult<Decision> {
        if options.is_empty() {
            return Err(ScribeError::invalid_input("option catalogue is empty"));
        }
        self.validate_keywords(keywords)?;

        let _span = selection_span!(keywords, options.len()).entered();

        let mut summary = BTreeMap::new();
        let (index, max, next_wildcards, resolved_by) =
            if let Some(hit) = best_by_name(keywords, options) {
                debug!(index = hit.index, score = hit.score, "resolved by name");
                (hit.index, hit.score, wildcards.clone(), Resolution::Name)
            } else {
                let expander = self.expander();
                let outcome = score_by_corpus(&expander, self.corpus, options, wildcards, used)?;
                summary = outcome.summaries;
                match outcome.winner {
                    Some(winner) => {
                        debug!(index = winner.index, count = winner.count, "resolved by corpus");
                        (winner.index, winner.count, winner.wildcards, Resolution::Corpus)
                    }
                    None => {
                        let index = fallback::pick_index(options.len(), self.selection.random_seed);
                        debug!(index, "resolved by random fallback");
                        (index, 0, outcome.last_expansion, Resolution::Random)
                    }
                }
            };

        let selected = options.get(index).ok_or_else(|| {
            ScribeError::invalid_input(format!("selected index {index} outside catalogue"))
        })?;

        let mut next_used = used.clone();
        next_used.insert(selected.label.clone());

        info!(
            option = %selected.id,
            max,
            resolved_by = ?resolved_by,
            used = next_used.len(),
            "option selected"
        );

        Ok(Decision {
            keywords: keywords.to_string(),
            option: selected.id.clone(),
            options: options.clone(),
            max,
            summary,
            wildcards: next_wildcards,
            used: next_used,
            resolved_by,
        })
    }
}
