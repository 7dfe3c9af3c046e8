//! SQLite connection helpers.

use std::path::Path;

use diesel::{Connection, RunQueryDsl, SqliteConnection, sql_query};

use crate::store::StoreError;

/// Open a SQLite connection at `path` and apply connection-wide PRAGMAs.
///
/// The file is created if it does not exist.
pub fn connect_sqlite(path: &Path) -> Result<SqliteConnection, StoreError> {
    let url = path.to_str().ok_or_else(|| StoreError::NonUtf8Path {
        path: path.to_path_buf(),
    })?;

    let mut conn =
        SqliteConnection::establish(url).map_err(|source| StoreError::Connection {
            path: path.to_path_buf(),
            source,
        })?;

    sql_query("PRAGMA journal_mode=WAL;").execute(&mut conn)?;
    sql_query("PRAGMA busy_timeout=5000;").execute(&mut conn)?;
    Ok(conn)
}
