//! One-shot schema creation.
//!
//! There is no versioning: the schema is created once, when the database file
//! is first needed, and assumed stable afterwards.

use std::path::Path;

use diesel::{Connection, connection::SimpleConnection};
use tracing::info;

use crate::{db::connection::connect_sqlite, store::StoreError};

/// DDL for a fresh price database: three tables plus the `(symbol, date)` unique index.
pub const SCHEMA_SQL: &str = "
CREATE TABLE TimeSeries (
    symbol   TEXT NOT NULL,
    date     DATE NOT NULL,
    open     REAL NOT NULL,
    high     REAL NOT NULL,
    low      REAL NOT NULL,
    close    REAL NOT NULL,
    volume   REAL NOT NULL,
    adjclose REAL NOT NULL
);
CREATE TABLE Assets (
    symbol    TEXT NOT NULL,
    name      TEXT,
    sector_id INTEGER
);
CREATE TABLE GicsSectors (
    id   INTEGER NOT NULL,
    name TEXT
);
CREATE UNIQUE INDEX idx_time_series_symbol_date ON TimeSeries (symbol, date);
";

/// Name of the unique index enforcing one row per `(symbol, date)`.
pub const UNIQUE_INDEX_NAME: &str = "idx_time_series_symbol_date";

/// Creates a new database file at `path` with the price schema.
///
/// Fails with [`StoreError::AlreadyExists`] if anything already exists at `path`.
pub fn create_schema(path: &Path) -> Result<(), StoreError> {
    if path.exists() {
        return Err(StoreError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    let mut conn = connect_sqlite(path)?;
    conn.transaction::<_, diesel::result::Error, _>(|conn| conn.batch_execute(SCHEMA_SQL))?;
    info!(path = %path.display(), "created price database");
    Ok(())
}

/// Creates the schema unless a database file already exists at `path`.
///
/// Returns `true` when the file was created by this call.
pub fn ensure_schema(path: &Path) -> Result<bool, StoreError> {
    if path.exists() {
        return Ok(false);
    }
    create_schema(path)?;
    Ok(true)
}
