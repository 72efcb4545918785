//! # scribe-wildcard
//!
//! Turns option labels into LIKE patterns: tokenize the label, look each
//! token up in the keyword dictionary, and decorate every synonym with the
//! delimiter markers the corpus matcher expects.

pub mod expander;
pub mod tokenizer;
pub mod variants;

pub use expander::WildcardExpander;
