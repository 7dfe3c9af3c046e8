//! SQLite persistence and batch driver for daily price history.
//!
//! - [`db`]: connection helper and one-shot schema creation.
//! - [`store`]: deduplicating writes into `TimeSeries`.
//! - [`symbols`]: symbol sources (explicit list or delimited file) and sanitization.
//! - [`populate`]: the fetch → parse → save loop over a symbol set.
//! - [`config`]: layered loader configuration for the `populate-db` binary.

#![deny(missing_docs)]

pub mod config;
pub mod db;
pub mod models;
pub mod populate;
pub mod schema;
pub mod store;
pub mod symbols;
