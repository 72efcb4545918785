//! Single connection behind `std::sync::Mutex`.
//! Serialized access: no contention between writers. Safe to call from
//! inside an async runtime; the lock is held only for one query.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use scribe_core::errors::ScribeResult;

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// A single connection protected by a mutex.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open a connection to the given database path.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> ScribeResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> ScribeResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, 0)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the lock and execute a closure with the connection.
    ///
    /// A lock poisoned by a panicking holder surfaces as a storage error.
    pub fn with_conn_sync<F, T>(&self, f: F) -> ScribeResult<T>
    where
        F: FnOnce(&Connection) -> ScribeResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("connection lock poisoned: {e}")))?;
        f(&guard)
    }
}
