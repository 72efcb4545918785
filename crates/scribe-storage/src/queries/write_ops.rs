//! Write record upserts and reads.

use std::collections::BTreeMap;

use chrono::Utc;
use rusqlite::{params, Connection};

use scribe_core::errors::ScribeResult;

use crate::to_storage_err;

/// Upsert every field of `key` in one transaction.
pub fn update_write(
    conn: &Connection,
    key: &str,
    fields: &BTreeMap<String, String>,
) -> ScribeResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("update_write begin: {e}")))?;

    let now = Utc::now().to_rfc3339();
    for (field, value) in fields {
        tx.execute(
            "INSERT INTO writes (key, field, value, updated_at) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(key, field) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at",
            params![key, field, value, now],
        )
        .map_err(|e| to_storage_err(format!("update_write {key}.{field}: {e}")))?;
    }

    tx.commit()
        .map_err(|e| to_storage_err(format!("update_write commit: {e}")))?;
    Ok(())
}

/// All fields stored under `key`. Empty when the key was never written.
pub fn get_write(conn: &Connection, key: &str) -> ScribeResult<BTreeMap<String, String>> {
    let mut stmt = conn
        .prepare("SELECT field, value FROM writes WHERE key = ?1")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![key], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut fields = BTreeMap::new();
    for row in rows {
        let (field, value) = row.map_err(|e| to_storage_err(e.to_string()))?;
        fields.insert(field, value);
    }
    Ok(fields)
}
