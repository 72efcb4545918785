//! Boundary request/response records. Transport-agnostic; JSON via serde.
//! The select response is [`scribe_core::Decision`] itself.

use serde::{Deserialize, Serialize};

use scribe_core::models::{OptionCatalogue, UsedSet, WildcardSet};

/// Boundary operations handled by [`crate::ContentService::handle_json`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Lookup,
    Select,
    Commit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupRequest {
    pub keywords: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectRequest {
    pub keywords: String,
    pub options: OptionCatalogue,
    #[serde(default)]
    pub wildcards: WildcardSet,
    #[serde(default)]
    pub used: UsedSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitRequest {
    pub key: String,
    pub content: String,
}

/// Empty success acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitAck {}
