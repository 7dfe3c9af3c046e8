//! Deduplicating persistence of [`PriceRecord`]s.
//!
//! `TimeSeries` holds at most one row per `(symbol, date)`. Saving a batch never
//! fails on that constraint: a conflicting row is skipped on its own, the rest
//! of the batch is still written, and the caller gets exact per-row counts in a
//! [`SaveReport`]. The first row accepted for a key wins; later variants with
//! different prices are ignored.

pub mod repo;

use std::path::{Path, PathBuf};

use quote_ingestor::models::price_record::PriceRecord;
use thiserror::Error;

use crate::db::{connection::connect_sqlite, create::ensure_schema};

/// Errors raised by the price store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Schema creation was requested for a path that already exists.
    #[error("database already exists at {}", path.display())]
    AlreadyExists {
        /// The existing path.
        path: PathBuf,
    },

    /// SQLite needs a UTF-8 path.
    #[error("database path is not valid UTF-8: {}", path.display())]
    NonUtf8Path {
        /// The offending path.
        path: PathBuf,
    },

    /// The database file could not be opened.
    #[error("failed to open database at {}", path.display())]
    Connection {
        /// The database path.
        path: PathBuf,
        /// Underlying Diesel error.
        #[source]
        source: diesel::ConnectionError,
    },

    /// A statement failed.
    #[error("database query failed")]
    Query(#[from] diesel::result::Error),
}

/// Outcome of one save call, counted per row.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SaveReport {
    /// Rows written.
    pub inserted: usize,
    /// Rows skipped because `(symbol, date)` was already stored.
    pub duplicates: usize,
}

impl SaveReport {
    /// Rows offered to the store.
    pub fn total(&self) -> usize {
        self.inserted + self.duplicates
    }
}

/// Saves `records` into the database at `path`, creating it if absent.
///
/// Runs in a single immediate transaction on a connection opened for this call
/// and closed before returning.
pub fn save_records(records: &[PriceRecord], path: &Path) -> Result<SaveReport, StoreError> {
    ensure_schema(path)?;

    let mut conn = connect_sqlite(path)?;
    let report = conn.immediate_transaction::<_, diesel::result::Error, _>(|conn| {
        repo::insert_prices(conn, records)
    })?;
    Ok(report)
}
