//! Canonical in-memory representation of one daily price row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Width of the persisted symbol column, in bytes.
pub const MAX_SYMBOL_BYTES: usize = 8;

/// One day of prices for a single symbol, as parsed from the quote endpoint.
///
/// Records are built by [`parse_price_lines`](crate::parse::parse_price_lines)
/// and handed to the store once; nothing mutates them in between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Instrument symbol, at most [`MAX_SYMBOL_BYTES`] bytes.
    pub symbol: String,

    /// Trading day.
    pub date: NaiveDate,

    /// Opening price.
    pub open: f64,

    /// Highest price during the day.
    pub high: f64,

    /// Lowest price during the day.
    pub low: f64,

    /// Closing price.
    pub close: f64,

    /// Volume traded during the day.
    pub volume: f64,

    /// Closing price adjusted for splits and dividends.
    pub adjclose: f64,
}

/// Cuts `symbol` down to [`MAX_SYMBOL_BYTES`] without splitting a character.
pub fn fit_symbol(symbol: &str) -> &str {
    if symbol.len() <= MAX_SYMBOL_BYTES {
        return symbol;
    }
    let mut end = MAX_SYMBOL_BYTES;
    while !symbol.is_char_boundary(end) {
        end -= 1;
    }
    &symbol[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_symbols_are_untouched() {
        assert_eq!(fit_symbol("ABC"), "ABC");
        assert_eq!(fit_symbol("ABCDEFGH"), "ABCDEFGH");
    }

    #[test]
    fn long_symbols_are_cut_to_eight_bytes() {
        assert_eq!(fit_symbol("ABCDEFGHIJ"), "ABCDEFGH");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // "é" is two bytes; byte 8 falls in the middle of it.
        let s = "ABCDEFGé";
        assert_eq!(s.len(), 9);
        assert_eq!(fit_symbol(s), "ABCDEFG");
    }
}
