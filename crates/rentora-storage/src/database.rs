// SPDX-FileCopyrightText: 2026 Rentora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All access is serialized through tokio-rusqlite's single background thread.
//! Do NOT create additional Connection instances for writes.

use rentora_core::RentoraError;
use tokio_rusqlite::Connection;
use tracing::debug;

use crate::migrations;

/// Handle to the SQLite database.
///
/// Wraps a single [`tokio_rusqlite::Connection`]. All queries go through
/// [`Database::connection`] and `call()`, which executes closures one at a
/// time on a dedicated background thread. Cloning the handle shares that
/// thread.
#[derive(Clone)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `path`, creating the file if needed, then apply
    /// PRAGMA setup and run pending migrations.
    pub async fn open(path: &str) -> Result<Self, RentoraError> {
        let conn = Connection::open(path).await.map_err(RentoraError::data_access)?;
        let db = Self { conn };
        db.configure().await?;
        debug!(path, "database open");
        Ok(db)
    }

    /// Open a fresh in-memory database with the full schema applied.
    pub async fn open_in_memory() -> Result<Self, RentoraError> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(RentoraError::data_access)?;
        let db = Self { conn };
        db.configure().await?;
        Ok(db)
    }

    /// The underlying connection handle for `call()`-style queries.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Checkpoint the WAL and close the connection.
    pub async fn close(self) -> Result<(), RentoraError> {
        self.conn
            .call(|conn| {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        self.conn.close().await.map_err(map_tr_err)?;
        debug!("database closed");
        Ok(())
    }

    async fn configure(&self) -> Result<(), RentoraError> {
        self.conn
            .call(|conn| -> Result<(), RentoraError> {
                conn.execute_batch(
                    "PRAGMA journal_mode = WAL;
                     PRAGMA synchronous = NORMAL;
                     PRAGMA foreign_keys = ON;
                     PRAGMA busy_timeout = 5000;",
                )
                .map_err(RentoraError::data_access)?;
                migrations::run_migrations(conn)?;
                Ok(())
            })
            .await
            .map_err(RentoraError::data_access)
    }
}

/// Map a tokio-rusqlite error into the crate error type.
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error) -> RentoraError {
    RentoraError::data_access(e)
}
