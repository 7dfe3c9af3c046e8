use thiserror::Error;

use crate::{
    models::date_range::DateFormatError, parse::ParseError, providers::ProviderError,
};

/// The unified error type for the `quote_ingestor` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The quote endpoint could not be reached or answered with an error.
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// A data row had the right shape but a field did not parse.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// A start or end date input did not match the configured format.
    #[error("Date format error: {0}")]
    DateFormat(#[from] DateFormatError),
}
