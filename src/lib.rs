//! Exchange-rate API gateway
//!
//! A small HTTP service with three endpoint groups:
//! - a static greeting,
//! - a read-through cached proxy over the CoinGecko exchange-rate API,
//! - user-profile read/update backed by PostgreSQL.
//!
//! The caching core lives in [`api::middleware::cache`].

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use api::state::AppState;
use infrastructure::cache::create_cache;
use infrastructure::rates::{CoinGeckoConfig, CoinGeckoProvider};
use infrastructure::user::PostgresUserRepository;

/// Create the application state with all services initialized.
///
/// Resources are acquired here at startup and handed to the router as
/// explicit dependencies; nothing reaches for globals later.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let cache = create_cache(&config.cache).await?;

    let rate_provider = CoinGeckoProvider::new(CoinGeckoConfig {
        base_url: config.upstream.base_url.clone(),
        timeout: Duration::from_secs(config.upstream.timeout_secs),
    })?;

    let database_url = match &config.database.url {
        Some(url) => url.clone(),
        None => std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?,
    };

    info!("Connecting to PostgreSQL...");
    let pg_pool = sqlx::PgPool::connect(&database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
    info!("PostgreSQL connection established");

    Ok(AppState::new(
        cache,
        Arc::new(rate_provider),
        Arc::new(PostgresUserRepository::new(pg_pool)),
    ))
}
