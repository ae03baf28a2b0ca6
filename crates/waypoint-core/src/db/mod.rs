//! Database operations and SQLite management for itineraries and destinations.
//!
//! This module owns the SQLite connection, the schema, and the
//! [`SqliteStore`] that lets the itinerary manager run against an open
//! transaction. Every destination mutation runs inside one `IMMEDIATE`
//! transaction, so concurrent writers are serialized and readers never see a
//! half-applied re-sequencing.

use std::{path::Path, time::Duration};

use rusqlite::{Connection, TransactionBehavior};

use crate::error::{DatabaseResultExt, Result};

pub mod destination_queries;
pub mod destination_store;
pub mod itinerary_queries;
pub mod migrations;

pub use destination_store::SqliteStore;

/// How long a writer waits for SQLite's lock before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to set busy timeout")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Runs `f` against a [`SqliteStore`] inside an `IMMEDIATE` transaction.
    ///
    /// Commits when `f` succeeds. On error the transaction is dropped and
    /// rolled back, and the error is returned unchanged.
    pub(crate) fn write<T>(
        &mut self,
        f: impl FnOnce(&mut SqliteStore<'_>) -> Result<T>,
    ) -> Result<T> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let value = {
            let mut store = SqliteStore::new(&tx);
            f(&mut store)?
        };

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(value)
    }

    /// Runs `f` against a [`SqliteStore`] over the bare connection.
    pub(crate) fn read<T>(&self, f: impl FnOnce(&mut SqliteStore<'_>) -> Result<T>) -> Result<T> {
        let mut store = SqliteStore::new(&self.connection);
        f(&mut store)
    }
}
