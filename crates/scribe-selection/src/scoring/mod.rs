//! Scoring phases. Both scan the catalogue in order; the first strictly
//! greater score wins, so ties go to the earlier option.

pub mod corpus_score;
pub mod name_score;

pub use corpus_score::{score_by_corpus, CorpusOutcome, CorpusWinner};
pub use name_score::{best_by_name, count_occurrences, NameHit};
