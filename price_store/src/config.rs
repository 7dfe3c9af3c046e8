//! Loader configuration: defaults, TOML file, and environment overrides.
//!
//! Values are layered, lowest precedence first:
//! 1. [`LoaderConfig::default`]
//! 2. an optional TOML file ([`LoaderConfig::load`])
//! 3. environment variables ([`LoaderConfig::apply_env`]): `PRICE_DB_PATH`,
//!    `QUOTE_ENDPOINT`, `QUOTE_PERIOD`, `QUOTE_TIMEOUT_SECS`
//! 4. command-line flags, applied by the binary
//!
//! Example file:
//! ```toml
//! db_path = "data/stocks.db"
//! endpoint = "http://ichart.finance.yahoo.com/table.csv"
//! date_format = "%Y-%m-%d"
//! period = "d"
//! timeout_secs = 30
//! ```

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use quote_ingestor::{
    models::{date_range::DEFAULT_DATE_FORMAT, period::Period},
    providers::yahoo_csv::DEFAULT_ENDPOINT,
};
use serde::{Deserialize, Serialize};
use shared_utils::env::{EnvVarError, env_override};
use thiserror::Error;

/// Database file used when nothing else is configured, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "stocks.db";

/// Default HTTP timeout per quote request, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors raised while assembling a [`LoaderConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {}", path.display())]
    Read {
        /// The config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`LoaderConfig`].
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// An environment override could not be parsed.
    #[error(transparent)]
    Env(#[from] EnvVarError),
}

/// Settings for a populate run that are not per-invocation inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoaderConfig {
    /// SQLite database file.
    pub db_path: PathBuf,
    /// Quote endpoint URL.
    pub endpoint: String,
    /// `strftime` format for `--start` / `--end`.
    pub date_format: String,
    /// Sampling granularity (`d`, `w` or `m`).
    pub period: Period,
    /// Per-request timeout in seconds; `0` disables it.
    pub timeout_secs: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            period: Period::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl LoaderConfig {
    /// Parses a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&s)
    }

    /// Applies environment overrides on top of the current values.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Some(db_path) = env_override::<PathBuf>("PRICE_DB_PATH")? {
            self.db_path = db_path;
        }
        if let Some(endpoint) = env_override::<String>("QUOTE_ENDPOINT")? {
            self.endpoint = endpoint;
        }
        if let Some(period) = env_override::<Period>("QUOTE_PERIOD")? {
            self.period = period;
        }
        if let Some(secs) = env_override::<u64>("QUOTE_TIMEOUT_SECS")? {
            self.timeout_secs = secs;
        }
        Ok(())
    }

    /// The request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}
