//! Upstream exchange-rate providers

pub mod coingecko;

pub use coingecko::{CoinGeckoConfig, CoinGeckoProvider};
