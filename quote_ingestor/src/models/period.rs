use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PeriodError {
    #[error("Invalid period: {input:?} (expected d, w or m)")]
    InvalidInput { input: String },
}

/// Sampling granularity of a requested price series.
///
/// The quote endpoint takes a one-letter code (`d`, `w`, `m`); see [`Period::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Period {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    /// The code sent in the `g` query parameter.
    pub fn code(self) -> &'static str {
        match self {
            Period::Daily => "d",
            Period::Weekly => "w",
            Period::Monthly => "m",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Period {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "d" | "day" | "daily" => Ok(Period::Daily),
            "w" | "wk" | "week" | "weekly" => Ok(Period::Weekly),
            "m" | "mo" | "month" | "monthly" => Ok(Period::Monthly),
            _ => Err(PeriodError::InvalidInput {
                input: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Period {
    type Error = PeriodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.code().to_string()
    }
}
