//! Start/end dates for a quote request, with the loader's defaults.
//!
//! Missing bounds default relative to the local calendar day at invocation time:
//! the start is [`DEFAULT_LOOKBACK_DAYS`] days ago and the end is yesterday.
//! Explicit bounds are strings that must match a caller-supplied `strftime`
//! format (default [`DEFAULT_DATE_FORMAT`]).

use std::fmt;

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Format expected for explicit start/end inputs unless configured otherwise.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Distance of the default start date from today.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 365;

/// Which end of the range an input belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Start => f.write_str("start"),
            Bound::End => f.write_str("end"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DateFormatError {
    #[error("{bound} date {input:?} does not match format {format:?}")]
    Mismatch {
        bound: Bound,
        input: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Inclusive calendar range of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The range used when neither bound is given: one year ago through yesterday.
    pub fn default_for(today: NaiveDate) -> Self {
        Self {
            start: today - Duration::days(DEFAULT_LOOKBACK_DAYS),
            end: today - Duration::days(1),
        }
    }

    /// Resolves optional string bounds against `today`.
    ///
    /// Each bound is resolved on its own, so a given start with a missing end
    /// still ends yesterday.
    pub fn resolve(
        start: Option<&str>,
        end: Option<&str>,
        format: &str,
        today: NaiveDate,
    ) -> Result<Self, DateFormatError> {
        let defaults = Self::default_for(today);
        let start = match start {
            Some(s) => parse_bound(Bound::Start, s, format)?,
            None => defaults.start,
        };
        let end = match end {
            Some(s) => parse_bound(Bound::End, s, format)?,
            None => defaults.end,
        };
        Ok(Self { start, end })
    }

    /// [`DateRange::resolve`] against the local calendar day.
    pub fn resolve_local(
        start: Option<&str>,
        end: Option<&str>,
        format: &str,
    ) -> Result<Self, DateFormatError> {
        Self::resolve(start, end, format, Local::now().date_naive())
    }
}

fn parse_bound(bound: Bound, input: &str, format: &str) -> Result<NaiveDate, DateFormatError> {
    NaiveDate::parse_from_str(input, format).map_err(|source| DateFormatError::Mismatch {
        bound,
        input: input.to_string(),
        format: format.to_string(),
        source,
    })
}
