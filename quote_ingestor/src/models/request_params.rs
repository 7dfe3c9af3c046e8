use serde::{Deserialize, Serialize};

use crate::models::{date_range::DateRange, period::Period};

/// Parameters for one price-table request against a [`QuoteProvider`](crate::providers::QuoteProvider).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Instrument symbol as the endpoint expects it (e.g. `"AAPL"`, `"BRK-B"`).
    pub symbol: String,

    /// Inclusive date range to request.
    pub range: DateRange,

    /// Sampling granularity.
    #[serde(default)]
    pub period: Period,
}

impl QuoteRequest {
    pub fn new(symbol: impl Into<String>, range: DateRange, period: Period) -> Self {
        Self {
            symbol: symbol.into(),
            range,
            period,
        }
    }
}
