//! Router middleware

pub mod cache;

pub use cache::{read_through_cache, CacheOptions, RequestCache};
