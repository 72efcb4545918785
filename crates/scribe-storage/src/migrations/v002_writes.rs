//! v002: write records, one row per (key, field).

use rusqlite::Connection;

use scribe_core::errors::ScribeResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> ScribeResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS writes (
            key         TEXT NOT NULL,
            field       TEXT NOT NULL,
            value       TEXT NOT NULL,
            updated_at  TEXT NOT NULL,
            PRIMARY KEY (key, field)
        );

        CREATE INDEX IF NOT EXISTS idx_writes_key ON writes(key);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
