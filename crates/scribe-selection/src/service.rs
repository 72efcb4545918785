//! ContentService: the boundary facade over lookup, selection and commit.

use std::collections::BTreeMap;

use scribe_core::config::ScribeConfig;
use scribe_core::constants::CONTENT_FIELD;
use scribe_core::errors::{ScribeError, ScribeResult};
use scribe_core::models::{Decision, UsedSet, WildcardSet};
use scribe_core::traits::{ICorpusMatcher, IKeywordLookup, IWriteStore};
use scribe_observability::commit_span;
use tracing::info;

use crate::engine::SelectionEngine;
use crate::protocol::{CommitAck, CommitRequest, LookupRequest, Operation, SelectRequest};

/// Wires the collaborators to the three boundary operations.
pub struct ContentService<'a> {
    engine: SelectionEngine<'a>,
    writes: &'a dyn IWriteStore,
}

impl<'a> ContentService<'a> {
    pub fn new(
        lookup: &'a dyn IKeywordLookup,
        corpus: &'a dyn ICorpusMatcher,
        writes: &'a dyn IWriteStore,
        config: &ScribeConfig,
    ) -> Self {
        Self {
            engine: SelectionEngine::new(lookup, corpus, config),
            writes,
        }
    }

    pub fn engine(&self) -> &SelectionEngine<'a> {
        &self.engine
    }

    /// Expand the raw keywords once, from an empty accumulator and used set,
    /// to pre-populate wildcard state before a selection call.
    pub fn lookup_keywords(&self, raw_keywords: &str) -> ScribeResult<WildcardSet> {
        self.engine.validate_keywords(raw_keywords)?;
        self.engine
            .expander()
            .expand(raw_keywords, &WildcardSet::new(), &UsedSet::new())
    }

    pub fn select(&self, request: &SelectRequest) -> ScribeResult<Decision> {
        self.engine.select(
            &request.keywords,
            &request.options,
            &request.wildcards,
            &request.used,
        )
    }

    /// Store `content` on the write record identified by `key`.
    pub fn commit_content(&self, key: &str, content: &str) -> ScribeResult<CommitAck> {
        if key.is_empty() {
            return Err(ScribeError::invalid_input("commit key is empty"));
        }
        let _span = commit_span!(key).entered();
        let mut fields = BTreeMap::new();
        fields.insert(CONTENT_FIELD.to_string(), content.to_string());
        self.writes
            .update(key, &fields)
            .map_err(|e| ScribeError::from_dependency("write_store", e))?;
        info!(key, bytes = content.len(), "content committed");
        Ok(CommitAck::default())
    }

    /// Decode a JSON request body for `operation`, run it, encode the response.
    pub fn handle_json(&self, operation: Operation, body: &str) -> ScribeResult<String> {
        let response = match operation {
            Operation::Lookup => {
                let request: LookupRequest = serde_json::from_str(body)?;
                serde_json::to_string(&self.lookup_keywords(&request.keywords)?)?
            }
            Operation::Select => {
                let request: SelectRequest = serde_json::from_str(body)?;
                serde_json::to_string(&self.select(&request)?)?
            }
            Operation::Commit => {
                let request: CommitRequest = serde_json::from_str(body)?;
                serde_json::to_string(&self.commit_content(&request.key, &request.content)?)?
            }
        };
        Ok(response)
    }
}
