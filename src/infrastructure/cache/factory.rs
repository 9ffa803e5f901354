//! Cache backend selection

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::config::{CacheBackend, CacheConfig};
use crate::domain::cache::Cache;
use crate::domain::DomainError;

use super::in_memory::{InMemoryCache, InMemoryCacheConfig};
use super::redis::{RedisCache, RedisCacheConfig};

/// Builds the configured cache store.
///
/// `redis` connects to the configured URL; `memory` is a process-local store
/// for development and tests.
pub async fn create_cache(config: &CacheConfig) -> Result<Arc<dyn Cache>, DomainError> {
    match config.backend {
        CacheBackend::Redis => {
            info!(url = %config.url, "Using Redis cache backend");

            let mut redis_config = RedisCacheConfig::new(&config.url)
                .with_command_timeout(Duration::from_secs(config.command_timeout_secs));

            if let Some(prefix) = &config.key_prefix {
                redis_config = redis_config.with_key_prefix(prefix);
            }

            let cache = RedisCache::new(redis_config).await?;
            Ok(Arc::new(cache))
        }
        CacheBackend::Memory => {
            info!("Using in-memory cache backend");

            let cache = InMemoryCache::with_config(InMemoryCacheConfig::default());
            Ok(Arc::new(cache))
        }
    }
}
