//! Phase 2: per-option wildcard expansion counted against the corpus.

use std::collections::BTreeMap;

use scribe_core::errors::{ScribeError, ScribeResult};
use scribe_core::models::{OptionCatalogue, UsedSet, WildcardSet};
use scribe_core::traits::ICorpusMatcher;
use scribe_observability::corpus_span;
use scribe_wildcard::WildcardExpander;
use tracing::debug;

/// The option that won on corpus evidence, with the expansion that won it.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusWinner {
    pub index: usize,
    pub count: u64,
    pub wildcards: WildcardSet,
}

/// Everything phase 2 produces, winner or not.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusOutcome {
    pub winner: Option<CorpusWinner>,
    /// Corpus count per label; 0 for labels that added no token.
    pub summaries: BTreeMap<String, u64>,
    /// Expansion of the last option scanned. Carried forward when nothing wins.
    pub last_expansion: WildcardSet,
}

/// Expand every option on top of `wildcards` and count corpus matches for
/// those that add at least one token.
///
/// Each option is expanded from the incoming `wildcards`, not from the
/// previous option's result.
pub fn score_by_corpus(
    expander: &WildcardExpander<'_>,
    corpus: &dyn ICorpusMatcher,
    options: &OptionCatalogue,
    wildcards: &WildcardSet,
    used: &UsedSet,
) -> ScribeResult<CorpusOutcome> {
    let mut summaries = BTreeMap::new();
    let mut last_expansion = wildcards.clone();
    let mut winner: Option<CorpusWinner> = None;

    for (index, option) in options.iter().enumerate() {
        summaries.insert(option.label.clone(), 0);
        let candidate = expander.expand(&option.label, wildcards, used)?;

        if candidate.token_count() > wildcards.token_count() {
            let count = {
                let _span = corpus_span!(candidate.token_count()).entered();
                corpus
                    .count(&candidate)
                    .map_err(|e| ScribeError::from_dependency("corpus", e))?
            };
            debug!(option = %option.id, count, "corpus count");
            summaries.insert(option.label.clone(), count);

            if count > winner.as_ref().map_or(0, |w| w.count) {
                winner = Some(CorpusWinner {
                    index,
                    count,
                    wildcards: candidate.clone(),
                });
            }
        }

        last_expansion = candidate;
    }

    Ok(CorpusOutcome {
        winner,
        summaries,
        last_expansion,
    })
}
