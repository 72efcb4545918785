//! In-memory collaborator fakes that record how they were called.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use scribe_core::errors::{ScribeError, ScribeResult};
use scribe_core::models::{DictionaryEntry, UsedSet, WildcardSet};
use scribe_core::traits::{ICorpusMatcher, IKeywordLookup, IWriteStore};

/// Keyword dictionary backed by a `HashMap`. Every lookup is recorded.
#[derive(Debug, Default)]
pub struct InMemoryDictionary {
    entries: HashMap<String, Vec<String>>,
    calls: Mutex<Vec<String>>,
}

impl InMemoryDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, keyword: &str, synonyms: &[&str]) -> Self {
        self.insert(keyword, synonyms.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn insert(&mut self, keyword: &str, synonyms: Vec<String>) {
        self.entries.insert(keyword.to_string(), synonyms);
    }

    /// Tokens looked up so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }
}

impl From<BTreeMap<String, Vec<String>>> for InMemoryDictionary {
    fn from(entries: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl IKeywordLookup for InMemoryDictionary {
    fn lookup(&self, token: &str, excluded: &UsedSet) -> ScribeResult<Option<DictionaryEntry>> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(token.to_string());
        }
        let Some(synonyms) = self.entries.get(token) else {
            return Ok(None);
        };
        let content: Vec<String> = synonyms
            .iter()
            .filter(|s| !excluded.contains(s.as_str()))
            .cloned()
            .collect();
        if content.is_empty() {
            return Ok(None);
        }
        Ok(Some(DictionaryEntry::new(token, content)))
    }
}

/// Corpus of text records matched with SQL `LIKE` semantics: a record counts
/// when, for every token, its space-padded body matches one of the token's
/// patterns. Every call is recorded.
#[derive(Debug, Default)]
pub struct FakeCorpus {
    records: Vec<String>,
    calls: Mutex<Vec<WildcardSet>>,
}

impl FakeCorpus {
    pub fn new<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: records.into_iter().map(Into::into).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<WildcardSet> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }
}

impl ICorpusMatcher for FakeCorpus {
    fn count(&self, patterns: &WildcardSet) -> ScribeResult<u64> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(patterns.clone());
        }
        if patterns.is_empty() {
            return Ok(0);
        }
        let matched = self
            .records
            .iter()
            .filter(|body| {
                let padded = format!(" {body} ");
                patterns
                    .iter()
                    .all(|(_, pats)| pats.iter().any(|p| like_matches(p, &padded)))
            })
            .count();
        Ok(matched as u64)
    }
}

/// SQLite `LIKE`: `%` matches any run, `_` one character, ASCII case-insensitive.
pub fn like_matches(pattern: &str, text: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let t: Vec<char> = text.chars().collect();
    let (mut pi, mut ti) = (0usize, 0usize);
    let mut backtrack: Option<(usize, usize)> = None;

    while ti < t.len() {
        if pi < p.len() && p[pi] == '%' {
            backtrack = Some((pi, ti));
            pi += 1;
        } else if pi < p.len() && (p[pi] == '_' || p[pi].eq_ignore_ascii_case(&t[ti])) {
            pi += 1;
            ti += 1;
        } else if let Some((star_p, star_t)) = backtrack {
            pi = star_p + 1;
            ti = star_t + 1;
            backtrack = Some((star_p, star_t + 1));
        } else {
            return false;
        }
    }
    p[pi..].iter().all(|&c| c == '%')
}

/// Dictionary whose every lookup fails.
#[derive(Debug, Default)]
pub struct FailingLookup;

impl IKeywordLookup for FailingLookup {
    fn lookup(&self, _: &str, _: &UsedSet) -> ScribeResult<Option<DictionaryEntry>> {
        Err(ScribeError::dependency("keyword_lookup", "dictionary offline"))
    }
}

/// Corpus whose every count fails.
#[derive(Debug, Default)]
pub struct FailingCorpus;

impl ICorpusMatcher for FailingCorpus {
    fn count(&self, _: &WildcardSet) -> ScribeResult<u64> {
        Err(ScribeError::dependency("corpus", "corpus offline"))
    }
}

/// Write store that keeps every update in memory.
#[derive(Debug, Default)]
pub struct RecordingWriteStore {
    writes: Mutex<Vec<(String, BTreeMap<String, String>)>>,
}

impl RecordingWriteStore {
    pub fn writes(&self) -> Vec<(String, BTreeMap<String, String>)> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }
}

impl IWriteStore for RecordingWriteStore {
    fn update(&self, key: &str, fields: &BTreeMap<String, String>) -> ScribeResult<()> {
        if let Ok(mut writes) = self.writes.lock() {
            writes.push((key.to_string(), fields.clone()));
        }
        Ok(())
    }
}
