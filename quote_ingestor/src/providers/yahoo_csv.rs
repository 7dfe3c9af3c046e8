//! HTTP provider for the Yahoo-style `table.csv` quote endpoint.

pub mod params;
pub mod provider;

pub use params::request_url;
pub use provider::{DEFAULT_ENDPOINT, YahooCsvProvider};
