//! Bike-share provider HTTP client.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::domain::Station;

use super::error::StationError;
use super::source::{StationSource, Stations};
use super::types::parse_stations;

/// Contract (city network) queried when none is configured.
pub const DEFAULT_CONTRACT: &str = "Goteborg";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the provider client.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Station list endpoint, queried as-is with `contract` and `apiKey`
    pub base_url: String,
    /// API key sent as the `apiKey` query parameter
    pub api_key: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ProviderConfig {
    /// Create a new config for the given endpoint and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the provider's station list endpoint.
#[derive(Debug, Clone)]
pub struct StationClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl StationClient {
    /// Create a new provider client.
    pub fn new(config: &ProviderConfig) -> Result<Self, StationError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch every station in `contract`.
    pub async fn fetch_all(&self, contract: &str) -> Result<Vec<Station>, StationError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("contract", contract), ("apiKey", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(StationError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StationError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let stations = parse_stations(&body).map_err(|e| StationError::Json {
            message: e.to_string(),
        })?;

        debug!(contract, count = stations.len(), "fetched stations");
        Ok(stations)
    }
}

impl StationSource for StationClient {
    async fn fetch_stations(&self, contract: &str) -> Result<Stations, StationError> {
        self.fetch_all(contract).await.map(Arc::new)
    }
}
