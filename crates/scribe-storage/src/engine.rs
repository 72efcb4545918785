//! StorageEngine: owns the connection, runs migrations on open, and
//! implements IKeywordLookup + ICorpusMatcher + IWriteStore.

use std::collections::BTreeMap;
use std::path::Path;

use scribe_core::config::StorageConfig;
use scribe_core::errors::ScribeResult;
use scribe_core::models::{DictionaryEntry, UsedSet, WildcardSet};
use scribe_core::traits::{ICorpusMatcher, IKeywordLookup, IWriteStore};

use crate::migrations;
use crate::pool::{pragmas, WriteConnection};
use crate::queries::{corpus_ops, keyword_ops, write_ops};

/// SQLite-backed dictionary, corpus, and write store.
pub struct StorageEngine {
    conn: WriteConnection,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> ScribeResult<Self> {
        let engine = Self {
            conn: WriteConnection::open(path, busy_timeout_ms)?,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open the database named by `config.db_path`.
    pub fn from_config(config: &StorageConfig) -> ScribeResult<Self> {
        Self::open(Path::new(&config.db_path), config.busy_timeout_ms)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> ScribeResult<Self> {
        let engine = Self {
            conn: WriteConnection::open_in_memory()?,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> ScribeResult<()> {
        let version = self.conn.with_conn_sync(migrations::run_migrations)?;
        tracing::debug!(version, "storage ready");
        Ok(())
    }

    pub fn schema_version(&self) -> ScribeResult<u32> {
        self.conn.with_conn_sync(migrations::current_version)
    }

    pub fn is_wal_mode(&self) -> ScribeResult<bool> {
        self.conn.with_conn_sync(pragmas::verify_wal_mode)
    }

    // --- Seeding ---

    pub fn upsert_keyword(&self, keyword: &str, synonyms: &[String]) -> ScribeResult<()> {
        self.conn
            .with_conn_sync(|conn| keyword_ops::upsert_keyword(conn, keyword, synonyms))
    }

    pub fn insert_content(&self, body: &str) -> ScribeResult<i64> {
        self.conn
            .with_conn_sync(|conn| corpus_ops::insert_content(conn, body))
    }

    // --- Reads ---

    pub fn keyword_count(&self) -> ScribeResult<u64> {
        self.conn.with_conn_sync(keyword_ops::keyword_count)
    }

    pub fn content_count(&self) -> ScribeResult<u64> {
        self.conn.with_conn_sync(corpus_ops::content_count)
    }

    pub fn get_write(&self, key: &str) -> ScribeResult<BTreeMap<String, String>> {
        self.conn
            .with_conn_sync(|conn| write_ops::get_write(conn, key))
    }
}

impl IKeywordLookup for StorageEngine {
    fn lookup(&self, token: &str, excluded: &UsedSet) -> ScribeResult<Option<DictionaryEntry>> {
        self.conn
            .with_conn_sync(|conn| keyword_ops::get_keyword(conn, token, excluded))
    }
}

impl ICorpusMatcher for StorageEngine {
    fn count(&self, patterns: &WildcardSet) -> ScribeResult<u64> {
        self.conn
            .with_conn_sync(|conn| corpus_ops::count_matching(conn, patterns))
    }
}

impl IWriteStore for StorageEngine {
    fn update(&self, key: &str, fields: &BTreeMap<String, String>) -> ScribeResult<()> {
        self.conn
            .with_conn_sync(|conn| write_ops::update_write(conn, key, fields))
    }
}
