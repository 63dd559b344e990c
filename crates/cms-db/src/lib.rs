//! # cms-db
//!
//! libSQL entity store for the course admin backend.
//!
//! Holds users, courses, lessons, enrollments and reviews. Repository
//! methods live on [`service::CmsService`]; lesson mutations keep
//! `courses.duration` equal to the sum of the course's lesson durations
//! (see [`rollup`]).
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29) in local mode.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod rollup;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Database handle: a libSQL database and its single connection.
pub struct CmsDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl CmsDb {
    /// Open a local database at `path`, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Per-connection in SQLite; cascades depend on it.
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let cms_db = Self { db, conn };
        cms_db.run_migrations().await?;
        tracing::debug!(path, "opened database");
        Ok(cms_db)
    }

    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Begin an `IMMEDIATE` transaction: the write lock is taken up front, so
    /// reads inside it cannot be invalidated by another writer before commit.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the lock cannot be acquired.
    pub async fn write_transaction(&self) -> Result<libsql::Transaction, DatabaseError> {
        Ok(self
            .conn
            .transaction_with_behavior(libsql::TransactionBehavior::Immediate)
            .await?)
    }
}
