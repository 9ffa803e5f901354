//! Cache store contract and request-key derivation

pub mod key;
pub mod repository;

pub use key::request_cache_key;
pub use repository::{Cache, CacheExt};
