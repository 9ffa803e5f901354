//! CoinGecko exchange-rate provider

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::rates::{ExchangeRates, RateProvider};
use crate::domain::DomainError;

/// Configuration for the CoinGecko client
#[derive(Debug, Clone)]
pub struct CoinGeckoConfig {
    /// API base URL, e.g. "https://api.coingecko.com/api/v3"
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.coingecko.com/api/v3".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Exchange-rate provider backed by the CoinGecko public API
#[derive(Debug, Clone)]
pub struct CoinGeckoProvider {
    client: reqwest::Client,
    base_url: String,
}

impl CoinGeckoProvider {
    pub fn new(config: CoinGeckoConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl RateProvider for CoinGeckoProvider {
    async fn exchange_rates(&self) -> Result<ExchangeRates, DomainError> {
        let url = format!("{}/exchange_rates", self.base_url);
        debug!(url = %url, "Fetching exchange rates");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Exchange-rate request failed");
                DomainError::upstream(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Exchange-rate API returned an error");
            return Err(DomainError::upstream(format!("HTTP {}: {}", status, body)));
        }

        response.json::<ExchangeRates>().await.map_err(|e| {
            warn!(error = %e, "Failed to decode exchange-rate payload");
            DomainError::upstream(format!("Failed to parse response: {}", e))
        })
    }
}
