//! SQLite-backed key-value store.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Ensure the single `kv_store` table exists before returning.
//!
//! # Invariants
//! - One row per key; writes replace the row.
//! - Returned stores are ready for reads and writes.

use super::{KeyValueStore, StoreResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

const BOOTSTRAP_SQL: &str = "CREATE TABLE IF NOT EXISTS kv_store (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL
);";

/// Key-value store persisted in a single SQLite table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a store file.
    ///
    /// # Side effects
    /// - Creates the `kv_store` table when missing.
    /// - Emits `store_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::open_with("file", || Connection::open(path))
    }

    /// Opens a store that lives only as long as the returned value.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::open_with("memory", Connection::open_in_memory)
    }

    fn open_with(
        mode: &str,
        connect: impl FnOnce() -> rusqlite::Result<Connection>,
    ) -> StoreResult<Self> {
        let started_at = Instant::now();
        info!("event=store_open module=store status=start mode={mode}");

        let conn = match connect() {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=store_open module=store status=error mode={mode} duration_ms={} error_code=store_open_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        match bootstrap_connection(&conn) {
            Ok(()) => {
                info!(
                    "event=store_open module=store status=ok mode={mode} duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(Self { conn })
            }
            Err(err) => {
                error!(
                    "event=store_open module=store status=error mode={mode} duration_ms={} error_code=store_bootstrap_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }
}

fn bootstrap_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    conn.execute_batch(BOOTSTRAP_SQL)
}
