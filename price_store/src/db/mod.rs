//! Database utilities for connections and schema creation.
//!
//! This module provides:
//! - SQLite connection helper: [`connection::connect_sqlite`] applies WAL and a 5000ms busy_timeout.
//! - One-shot schema creation: [`create::create_schema`] fails on an existing file,
//!   [`create::ensure_schema`] creates the schema only when the file is absent.
//!
//! Example:
//! ```no_run
//! use price_store::db::{connection, create};
//!
//! let db_path = std::env::temp_dir().join("price_store_example.db");
//! create::ensure_schema(&db_path).expect("schema");
//! let _conn = connection::connect_sqlite(&db_path).expect("connect");
//! ```

pub mod connection;
pub mod create;
