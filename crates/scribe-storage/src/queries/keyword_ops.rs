//! Keyword dictionary reads and upserts.

use rusqlite::{params, Connection, OptionalExtension};

use scribe_core::errors::{ScribeResult, StorageError};
use scribe_core::models::{DictionaryEntry, UsedSet};

use crate::to_storage_err;

/// Insert or replace the synonyms stored for `keyword`.
pub fn upsert_keyword(conn: &Connection, keyword: &str, synonyms: &[String]) -> ScribeResult<()> {
    let content = serde_json::to_string(synonyms)?;
    conn.execute(
        "INSERT INTO keywords (keyword, content) VALUES (?1, ?2)
         ON CONFLICT(keyword) DO UPDATE SET content = excluded.content",
        params![keyword, content],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Exact-match lookup. Synonyms equal to an excluded label are dropped;
/// an entry left without synonyms reads as not found.
pub fn get_keyword(
    conn: &Connection,
    keyword: &str,
    excluded: &UsedSet,
) -> ScribeResult<Option<DictionaryEntry>> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT content FROM keywords WHERE keyword = ?1",
            params![keyword],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let Some(raw) = raw else {
        return Ok(None);
    };

    let synonyms: Vec<String> =
        serde_json::from_str(&raw).map_err(|e| StorageError::MalformedEntry {
            keyword: keyword.to_string(),
            reason: e.to_string(),
        })?;

    let content: Vec<String> = synonyms
        .into_iter()
        .filter(|s| !excluded.contains(s))
        .collect();
    if content.is_empty() {
        return Ok(None);
    }
    Ok(Some(DictionaryEntry::new(keyword, content)))
}

/// Number of dictionary entries.
pub fn keyword_count(conn: &Connection) -> ScribeResult<u64> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM keywords", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count.max(0) as u64)
}
