//! Provider abstraction for quote sources.
//!
//! A [`QuoteProvider`] turns a [`QuoteRequest`] into the raw response body of a
//! price table, one element per line. Parsing is left to [`crate::parse`], so a
//! provider only has to deal with transport concerns.
//!
//! The trait is async and object safe, so the loader can take a
//! `&dyn QuoteProvider` and tests can substitute an in-memory source.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use quote_ingestor::models::request_params::QuoteRequest;
//! use quote_ingestor::providers::{ProviderError, QuoteProvider};
//!
//! struct Canned;
//!
//! #[async_trait]
//! impl QuoteProvider for Canned {
//!     async fn fetch_lines(&self, _request: &QuoteRequest) -> Result<Vec<String>, ProviderError> {
//!         Ok(vec!["Date,Open,High,Low,Close,Volume,Adj Close".to_string()])
//!     }
//! }
//! ```

pub mod yahoo_csv;

use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use crate::models::request_params::QuoteRequest;

/// Source of raw price tables.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetches the price table for `request` and returns its lines, header included.
    ///
    /// No retry is attempted; transport and endpoint failures are returned as-is.
    async fn fetch_lines(&self, request: &QuoteRequest) -> Result<Vec<String>, ProviderError>;
}

/// Errors that can occur during the creation of a provider instance.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The configured endpoint is not an absolute URL.
    #[snafu(display("Invalid quote endpoint {endpoint:?}: {message}"))]
    InvalidEndpoint {
        endpoint: String,
        message: String,
        backtrace: Backtrace,
    },
}

/// Errors that can occur within a `QuoteProvider` implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// An error during the HTTP exchange (e.g., network failure, timeout).
    #[snafu(display("Quote request failed: {source}"))]
    Reqwest {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The endpoint answered with a non-success status.
    #[snafu(display("Quote endpoint returned {status} for {symbol}: {message}"))]
    Api {
        symbol: String,
        status: u16,
        message: String,
        backtrace: Backtrace,
    },
}
