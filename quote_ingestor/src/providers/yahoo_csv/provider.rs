use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use snafu::ResultExt;
use tracing::debug;

use crate::{
    models::request_params::QuoteRequest,
    providers::{
        ApiSnafu, ClientBuildSnafu, InvalidEndpointSnafu, ProviderError, ProviderInitError,
        QuoteProvider, ReqwestSnafu, yahoo_csv::params::request_url,
    },
};

/// Historical `table.csv` endpoint the loader talks to unless configured otherwise.
pub const DEFAULT_ENDPOINT: &str = "http://ichart.finance.yahoo.com/table.csv";

pub struct YahooCsvProvider {
    client: Client,
    endpoint: Url,
}

impl YahooCsvProvider {
    /// Creates a provider for `endpoint` with an optional per-request timeout.
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self, ProviderInitError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context(ClientBuildSnafu)?;

        Self::with_client(client, endpoint)
    }

    /// Creates a provider that sends requests through an existing client.
    pub fn with_client(client: Client, endpoint: &str) -> Result<Self, ProviderInitError> {
        let endpoint_url = Url::parse(endpoint).map_err(|e| {
            InvalidEndpointSnafu {
                endpoint,
                message: e.to_string(),
            }
            .build()
        })?;

        if endpoint_url.cannot_be_a_base() {
            return InvalidEndpointSnafu {
                endpoint,
                message: "not a hierarchical URL",
            }
            .fail();
        }

        Ok(Self {
            client,
            endpoint: endpoint_url,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl QuoteProvider for YahooCsvProvider {
    async fn fetch_lines(&self, request: &QuoteRequest) -> Result<Vec<String>, ProviderError> {
        let url = request_url(&self.endpoint, request);
        debug!(symbol = %request.symbol, %url, "requesting price table");

        let response = self.client.get(url).send().await.context(ReqwestSnafu)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return ApiSnafu {
                symbol: request.symbol.clone(),
                status: status.as_u16(),
                message,
            }
            .fail();
        }

        let body = response.text().await.context(ReqwestSnafu)?;
        Ok(body.lines().map(str::to_owned).collect())
    }
}
