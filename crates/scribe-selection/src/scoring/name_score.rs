//! Phase 1: literal label occurrences in the keywords text.

use scribe_core::models::OptionCatalogue;

/// The option that won on name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameHit {
    pub index: usize,
    pub score: u64,
}

/// Non-overlapping occurrences of `label` in `keywords`. An empty label scores 0.
pub fn count_occurrences(keywords: &str, label: &str) -> u64 {
    if label.is_empty() {
        return 0;
    }
    keywords.matches(label).count() as u64
}

/// Best option by occurrence count, or `None` when every count is 0.
pub fn best_by_name(keywords: &str, options: &OptionCatalogue) -> Option<NameHit> {
    let mut best: Option<NameHit> = None;
    for (index, option) in options.iter().enumerate() {
        let score = count_occurrences(keywords, &option.label);
        if score > best.map_or(0, |b| b.score) {
            best = Some(NameHit { index, score });
        }
    }
    best
}
