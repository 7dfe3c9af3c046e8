//! Tolerant parser for the quote endpoint's CSV price table.
//!
//! The first line is a header and is dropped. Every other line is split on
//! commas; lines without exactly [`FIELD_COUNT`] fields are skipped so that
//! sparse upstream data does not fail the batch. Lines that do have the right
//! shape must parse completely, otherwise the whole call fails with
//! [`ParseError`].

use std::num::ParseFloatError;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::price_record::{PriceRecord, fit_symbol};

/// Fields per data row: date, open, high, low, close, volume, adjclose.
pub const FIELD_COUNT: usize = 7;

/// Date format used by the endpoint in the first column.
pub const CSV_DATE_FORMAT: &str = "%Y-%m-%d";

const NUMERIC_FIELDS: [&str; 6] = ["open", "high", "low", "close", "volume", "adjclose"];

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: invalid date {value:?}")]
    InvalidDate {
        line: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("line {line}: invalid {field} value {value:?}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Parses raw response lines for `symbol` into records, in input order.
///
/// Line numbers in errors are 1-based and count the header.
pub fn parse_price_lines<S: AsRef<str>>(
    symbol: &str,
    lines: &[S],
) -> Result<Vec<PriceRecord>, ParseError> {
    let stored_symbol = fit_symbol(symbol);
    if stored_symbol.len() < symbol.len() {
        warn!(symbol, stored = stored_symbol, "symbol truncated to column width");
    }

    let mut records = Vec::with_capacity(lines.len().saturating_sub(1));

    for (idx, raw) in lines.iter().enumerate().skip(1) {
        let line = idx + 1;
        let fields: Vec<&str> = raw.as_ref().trim().split(',').collect();

        if fields.len() != FIELD_COUNT {
            debug!(symbol, line, fields = fields.len(), "skipping malformed row");
            continue;
        }

        let date_str = fields[0].trim();
        let date = NaiveDate::parse_from_str(date_str, CSV_DATE_FORMAT).map_err(|source| {
            ParseError::InvalidDate {
                line,
                value: date_str.to_string(),
                source,
            }
        })?;

        let mut values = [0f64; 6];
        for (slot, (name, raw_value)) in values
            .iter_mut()
            .zip(NUMERIC_FIELDS.into_iter().zip(&fields[1..]))
        {
            let raw_value = raw_value.trim();
            *slot = raw_value
                .parse::<f64>()
                .map_err(|source| ParseError::InvalidNumber {
                    line,
                    field: name,
                    value: raw_value.to_string(),
                    source,
                })?;
        }
        let [open, high, low, close, volume, adjclose] = values;

        records.push(PriceRecord {
            symbol: stored_symbol.to_string(),
            date,
            open,
            high,
            low,
            close,
            volume,
            adjclose,
        });
    }

    Ok(records)
}
