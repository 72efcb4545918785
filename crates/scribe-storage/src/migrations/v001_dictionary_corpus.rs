//! v001: keyword dictionary and content corpus.

use rusqlite::Connection;

use scribe_core::errors::ScribeResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> ScribeResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS keywords (
            keyword     TEXT PRIMARY KEY,
            content     TEXT NOT NULL DEFAULT '[]'
        );

        CREATE TABLE IF NOT EXISTS content_records (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            body        TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
