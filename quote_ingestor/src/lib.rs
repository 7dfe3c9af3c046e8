//! Fetch daily price tables from a remote quote endpoint and turn them into
//! typed [`PriceRecord`](models::price_record::PriceRecord)s.
//!
//! The crate is split in two stages:
//! - [`providers`]: a [`QuoteProvider`](providers::QuoteProvider) returns the raw
//!   response body as lines ([`providers::yahoo_csv`] is the HTTP implementation).
//! - [`parse`]: a tolerant CSV line parser that drops rows with the wrong field count.
//!
//! [`fetch_prices`] chains the two for one symbol.

pub mod errors;
pub mod models;
pub mod parse;
pub mod providers;

use errors::Error;
use models::{price_record::PriceRecord, request_params::QuoteRequest};
use providers::QuoteProvider;

/// Fetches the price table described by `request` and parses it into records.
///
/// Provider failures and malformed numeric fields both abort the call; rows with
/// the wrong number of fields are skipped by the parser.
pub async fn fetch_prices(
    provider: &dyn QuoteProvider,
    request: &QuoteRequest,
) -> Result<Vec<PriceRecord>, Error> {
    let lines = provider.fetch_lines(request).await?;
    let records = parse::parse_price_lines(&request.symbol, &lines)?;
    Ok(records)
}
