//! SQLite implementation of [`DocumentStore`].
//!
//! [`SqliteStore`] keeps one row per key in the `documents` table. Each `put`
//! is a single upsert statement, so a value is always replaced atomically.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::StorageError;
use crate::traits::DocumentStore;
use crate::types::DocumentKey;

/// SQLite-backed implementation of [`DocumentStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }
}

impl DocumentStore for SqliteStore {
    fn get(&self, key: &DocumentKey) -> Result<Option<Vec<u8>>, StorageError> {
        let body = self
            .conn
            .query_row(
                "SELECT body FROM documents WHERE key = ?1",
                params![key.as_str()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(body)
    }

    fn put(&mut self, key: &DocumentKey, value: &[u8]) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO documents (key, body, updated_at)
             VALUES (?1, ?2, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
             ON CONFLICT(key) DO UPDATE SET
                 body = excluded.body,
                 updated_at = excluded.updated_at",
            params![key.as_str(), value],
        )?;
        Ok(())
    }

    fn delete(&mut self, key: &DocumentKey) -> Result<bool, StorageError> {
        let removed = self.conn.execute(
            "DELETE FROM documents WHERE key = ?1",
            params![key.as_str()],
        )?;
        Ok(removed > 0)
    }

    fn keys(&self) -> Result<Vec<DocumentKey>, StorageError> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM documents ORDER BY key ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut keys = Vec::new();
        for row in rows {
            keys.push(DocumentKey::raw(row?));
        }
        Ok(keys)
    }
}
