//! Versioned schema migrations, tracked in `schema_version`.

pub mod v001_dictionary_corpus;
pub mod v002_writes;

use rusqlite::{params, Connection};

use scribe_core::errors::{ScribeResult, StorageError};

use crate::to_storage_err;

type Migration = fn(&Connection) -> ScribeResult<()>;

const MIGRATIONS: &[(u32, Migration)] = &[
    (1, v001_dictionary_corpus::migrate),
    (2, v002_writes::migrate),
];

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = 2;

/// Apply every migration newer than the recorded schema version.
pub fn run_migrations(conn: &Connection) -> ScribeResult<u32> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    for &(version, migrate) in MIGRATIONS {
        if version <= current {
            continue;
        }
        migrate(conn).map_err(|e| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        })?;
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            params![version],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        tracing::info!(version, "migration applied");
    }
    current_version(conn)
}

/// Highest applied schema version, 0 on a fresh database.
pub fn current_version(conn: &Connection) -> ScribeResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
