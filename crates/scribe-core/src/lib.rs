//! # scribe-core
//!
//! Foundation crate for the Scribe option selector.
//! Defines the typed records, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ScribeConfig;
pub use errors::{ScribeError, ScribeResult};
pub use models::{Decision, DictionaryEntry, OptionCatalogue, UsedSet, WildcardSet, WritingOption};
