//! Exchange-rate payloads and the upstream provider boundary

use std::collections::BTreeMap;
use std::fmt::Debug;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A single exchange rate as reported by the upstream source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Human-readable currency name (e.g. "Bitcoin")
    pub name: String,
    /// Currency unit or symbol (e.g. "BTC", "$")
    pub unit: String,
    /// Value of one BTC in this currency
    pub value: f64,
    /// Rate category: "crypto", "fiat" or "commodity"
    #[serde(rename = "type")]
    pub kind: String,
}

/// Full exchange-rate table keyed by currency code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRates {
    pub rates: BTreeMap<String, ExchangeRate>,
}

/// Upstream data source for exchange rates.
///
/// The caller only observes the deserialized payload or an
/// `DomainError::Upstream` failure; how the fetch happens is the
/// implementation's business.
#[async_trait]
pub trait RateProvider: Send + Sync + Debug {
    async fn exchange_rates(&self) -> Result<ExchangeRates, DomainError>;
}
