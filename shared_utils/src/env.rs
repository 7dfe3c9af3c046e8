use std::{fmt::Display, str::FromStr};

use thiserror::Error;

/// Errors raised while reading configuration from the process environment.
#[derive(Debug, Error)]
pub enum EnvVarError {
    /// A required variable is not set (or is not valid unicode).
    #[error("Missing environment variable: {0}")]
    Missing(String),

    /// The variable is set but its value does not parse into the requested type.
    #[error("Invalid value {value:?} for environment variable {name}: {reason}")]
    Invalid {
        name: String,
        value: String,
        reason: String,
    },
}

/// Reads an environment variable, returning a structured error if it's missing.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
pub fn get_env_var(name: &str) -> Result<String, EnvVarError> {
    std::env::var(name).map_err(|_| EnvVarError::Missing(name.to_string()))
}

/// Reads an optional override from the environment and parses it as `T`.
///
/// Unset and empty (after trimming) variables yield `Ok(None)`, so callers can
/// layer the result over values from a config file.
pub fn env_override<T>(name: &str) -> Result<Option<T>, EnvVarError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = match get_env_var(name) {
        Ok(raw) => raw,
        Err(EnvVarError::Missing(_)) => return Ok(None),
        Err(e) => return Err(e),
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed.parse::<T>().map(Some).map_err(|e| EnvVarError::Invalid {
        name: name.to_string(),
        value: raw.clone(),
        reason: e.to_string(),
    })
}
