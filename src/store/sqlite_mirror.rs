//! SQLite-backed session mirror.
//!
//! Wraps a `rusqlite::Connection` and runs schema migrations on open, so a
//! session file created by an older build keeps working. One row per mirror
//! key; the position map is stored as a single JSON blob in the `value` column.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, Connection};

use crate::store::mirror::SessionMirror;
use crate::types::errors::MirrorError;

/// Current schema version. Bump this when adding a new migration.
const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Durable mirror backed by a SQLite session file.
pub struct SqliteMirror {
    conn: Connection,
}

impl SqliteMirror {
    /// Opens (or creates) a session file at the given path and runs migrations.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, MirrorError> {
        let conn = Connection::open(path)
            .map_err(|e| MirrorError::Unavailable(e.to_string()))?;
        run_migrations(&conn).map_err(|e| MirrorError::Io(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Opens an in-memory session database, discarded on drop.
    pub fn open_in_memory() -> Result<Self, MirrorError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| MirrorError::Unavailable(e.to_string()))?;
        run_migrations(&conn).map_err(|e| MirrorError::Io(e.to_string()))?;
        Ok(Self { conn })
    }
}

impl SessionMirror for SqliteMirror {
    fn read(&self, key: &str) -> Result<Option<String>, MirrorError> {
        let result = self.conn.query_row(
            "SELECT value FROM session_store WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(MirrorError::Io(e.to_string())),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), MirrorError> {
        self.conn
            .execute(
                "INSERT INTO session_store (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, now_secs()],
            )
            .map_err(|e| MirrorError::Io(e.to_string()))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), MirrorError> {
        self.conn
            .execute("DELETE FROM session_store WHERE key = ?1", params![key])
            .map_err(|e| MirrorError::Io(e.to_string()))?;
        Ok(())
    }
}

fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

/// Returns the current schema version from the database (0 if table doesn't exist).
fn get_schema_version(conn: &Connection) -> i32 {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .unwrap_or(0)
}

/// Runs all pending schema migrations. Safe to call on every open.
fn run_migrations(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         CREATE TABLE IF NOT EXISTS schema_version (
             version INTEGER PRIMARY KEY,
             applied_at INTEGER NOT NULL,
             description TEXT NOT NULL
         );",
    )?;

    let current = get_schema_version(conn);

    if current < 1 {
        migration_v1(conn)?;
        record_version(conn, 1, "Initial schema: session_store key-value table")?;
    }

    debug_assert!(get_schema_version(conn) == CURRENT_SCHEMA_VERSION);
    Ok(())
}

fn migration_v1(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS session_store (
             key TEXT PRIMARY KEY,
             value TEXT NOT NULL,
             updated_at INTEGER NOT NULL
         );",
    )
}

fn record_version(conn: &Connection, version: i32, description: &str) -> Result<(), rusqlite::Error> {
    conn.execute(
        "INSERT INTO schema_version (version, applied_at, description) VALUES (?1, ?2, ?3)",
        params![version, now_secs(), description],
    )?;
    Ok(())
}
