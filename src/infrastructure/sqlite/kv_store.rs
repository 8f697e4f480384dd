use crate::domain::error::DomainError;
use crate::domain::ports::key_value_store::KeyValueStore;
use crate::infrastructure::sqlite::migrations::run_migrations;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::Mutex;

/// Key-value slots in a single SQLite table, standing in for the browser's
/// local storage.
pub struct SqliteKeyValueStore {
    conn: Mutex<Connection>,
}

impl SqliteKeyValueStore {
    pub fn new(conn: Connection) -> Result<Self, DomainError> {
        run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Opens (or creates) the database at `path`. `:memory:` is accepted.
    pub fn open(path: &str) -> Result<Self, DomainError> {
        let conn = Connection::open(path).map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
        if path != ":memory:" {
            conn.pragma_update(None, "journal_mode", "WAL")
                .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
        }
        Self::new(conn)
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.query_row(
            "SELECT value FROM storage WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| DomainError::Database(format!("Failed to read {key}: {e}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, chrono::Utc::now().to_rfc3339()],
        )
        .map_err(|e| DomainError::Database(format!("Failed to write {key}: {e}")))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute("DELETE FROM storage WHERE key = ?1", params![key])
            .map_err(|e| DomainError::Database(format!("Failed to remove {key}: {e}")))?;
        Ok(())
    }
}
