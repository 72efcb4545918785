//! # scribe-storage
//!
//! SQLite implementations of the collaborator traits: keyword dictionary,
//! content corpus matcher, and write store.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use scribe_core::errors::{ScribeError, StorageError};

/// Wrap a SQLite failure message as a [`ScribeError`].
pub(crate) fn to_storage_err(message: String) -> ScribeError {
    StorageError::SqliteError { message }.into()
}
