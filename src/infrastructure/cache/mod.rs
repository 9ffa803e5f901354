//! Cache store adapters

pub mod factory;
pub mod in_memory;
pub mod redis;

pub use factory::create_cache;
pub use in_memory::{InMemoryCache, InMemoryCacheConfig};
pub use redis::{RedisCache, RedisCacheConfig};
