//! The batch loop: fetch → parse → save for every symbol in a [`SymbolSet`].
//!
//! Symbols are processed one at a time, in set order, with one request and one
//! database connection each. The first failing symbol aborts the run; rows
//! saved for earlier symbols stay committed.

use std::path::PathBuf;

use quote_ingestor::{
    errors::Error as IngestError,
    fetch_prices,
    models::{date_range::DateRange, period::Period, request_params::QuoteRequest},
    providers::QuoteProvider,
};
use thiserror::Error;
use tracing::info;

use crate::{
    store::{SaveReport, StoreError, save_records},
    symbols::SymbolSet,
};

/// Settings shared by every symbol of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulateOptions {
    /// Date range requested for each symbol.
    pub range: DateRange,
    /// Sampling granularity.
    pub period: Period,
    /// Target database file; created on first save if absent.
    pub db_path: PathBuf,
}

/// Totals for a completed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PopulateSummary {
    /// Symbols processed.
    pub symbols_attempted: usize,
    /// Symbols for which at least one new row was saved.
    pub symbols_saved: usize,
    /// New rows saved across all symbols.
    pub records_saved: usize,
    /// Rows skipped because they were already stored.
    pub duplicates_skipped: usize,
}

impl PopulateSummary {
    fn record(&mut self, report: &SaveReport) {
        self.symbols_attempted += 1;
        if report.inserted > 0 {
            self.symbols_saved += 1;
        }
        self.records_saved += report.inserted;
        self.duplicates_skipped += report.duplicates;
    }
}

/// Errors that abort a populate run, tagged with the symbol being processed.
#[derive(Debug, Error)]
pub enum PopulateError {
    /// Fetching or parsing the symbol's prices failed.
    #[error("failed to fetch prices for {symbol}")]
    Ingest {
        /// The symbol being processed.
        symbol: String,
        /// Underlying error.
        #[source]
        source: IngestError,
    },

    /// Saving the symbol's prices failed.
    #[error("failed to save prices for {symbol}")]
    Store {
        /// The symbol being processed.
        symbol: String,
        /// Underlying error.
        #[source]
        source: StoreError,
    },
}

/// Loads every symbol in `symbols` into the database named by `options`.
///
/// `on_symbol` is called after each successful save, e.g. to print progress.
pub async fn populate<F>(
    provider: &dyn QuoteProvider,
    symbols: &SymbolSet,
    options: &PopulateOptions,
    mut on_symbol: F,
) -> Result<PopulateSummary, PopulateError>
where
    F: FnMut(&str, &SaveReport),
{
    let mut summary = PopulateSummary::default();

    for symbol in symbols {
        let request = QuoteRequest::new(symbol.as_str(), options.range, options.period);

        let records = fetch_prices(provider, &request)
            .await
            .map_err(|source| PopulateError::Ingest {
                symbol: symbol.clone(),
                source,
            })?;

        let report =
            save_records(&records, &options.db_path).map_err(|source| PopulateError::Store {
                symbol: symbol.clone(),
                source,
            })?;

        info!(
            symbol = %symbol,
            parsed = records.len(),
            inserted = report.inserted,
            duplicates = report.duplicates,
            "saved prices"
        );
        summary.record(&report);
        on_symbol(symbol, &report);
    }

    Ok(summary)
}
