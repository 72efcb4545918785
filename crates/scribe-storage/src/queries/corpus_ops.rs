//! Content corpus inserts and LIKE-pattern counting.

use rusqlite::{params, params_from_iter, Connection};

use scribe_core::errors::ScribeResult;
use scribe_core::models::WildcardSet;

use crate::to_storage_err;

/// Bound parameters per statement; stays under SQLite's default variable limit.
pub const MAX_BOUND_PATTERNS: usize = 32_000;

/// Append one record to the corpus. Returns its row id.
pub fn insert_content(conn: &Connection, body: &str) -> ScribeResult<i64> {
    conn.execute(
        "INSERT INTO content_records (body) VALUES (?1)",
        params![body],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(conn.last_insert_rowid())
}

/// Count records whose space-padded body matches, for every token, at least
/// one of that token's patterns. An empty set counts 0.
///
/// Duplicate patterns under a token are bound once.
pub fn count_matching(conn: &Connection, patterns: &WildcardSet) -> ScribeResult<u64> {
    let mut clauses = Vec::with_capacity(patterns.token_count());
    let mut bound: Vec<&str> = Vec::new();

    for (_, token_patterns) in patterns {
        let mut unique: Vec<&str> = Vec::with_capacity(token_patterns.len());
        for p in token_patterns {
            if !unique.contains(&p.as_str()) {
                unique.push(p.as_str());
            }
        }
        if unique.is_empty() {
            // A token with no patterns can match nothing.
            return Ok(0);
        }
        let ors: Vec<String> = unique
            .iter()
            .enumerate()
            .map(|(i, _)| format!("(' ' || body || ' ') LIKE ?{}", bound.len() + i + 1))
            .collect();
        clauses.push(format!("({})", ors.join(" OR ")));
        bound.extend(unique);
    }

    if clauses.is_empty() {
        return Ok(0);
    }
    if bound.len() > MAX_BOUND_PATTERNS {
        return Err(to_storage_err(format!(
            "wildcard set binds {} patterns, limit is {MAX_BOUND_PATTERNS}",
            bound.len()
        )));
    }

    let sql = format!(
        "SELECT COUNT(*) FROM content_records WHERE {}",
        clauses.join(" AND ")
    );
    let count: i64 = conn
        .query_row(&sql, params_from_iter(bound.iter()), |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count.max(0) as u64)
}

/// Number of corpus records.
pub fn content_count(conn: &Connection) -> ScribeResult<u64> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM content_records", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count.max(0) as u64)
}
