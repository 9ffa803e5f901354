//! Read-through response caching middleware
//!
//! Keys responses by the literal request path + query string and stores only
//! successful (2xx) JSON bodies, with a configurable TTL. On a hit the
//! downstream handler never runs; on a miss the handler's body is buffered
//! exactly once, conditionally stored, then relayed.
//!
//! Responses from the wrapped route are delivered inside the
//! `{"source": ..., "data": ...}` envelope, with `source` reporting where the
//! payload came from (`"API"` or `"cache"`).
//!
//! Store failures (lookup, write, corrupt stored payload) propagate as
//! 500-class errors instead of being treated as misses, so an outage stays
//! visible. There is no single-flight collapsing: concurrent misses for the
//! same key may each invoke the handler and each write, last write wins.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::api::types::ApiError;
use crate::domain::cache::{request_cache_key, Cache};
use crate::domain::DomainError;

/// Largest response body the middleware will buffer for caching
const MAX_CACHEABLE_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Middleware options
#[derive(Debug, Clone)]
pub struct CacheOptions {
    /// TTL applied to newly cached entries
    pub expire: Duration,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            expire: Duration::from_secs(300),
        }
    }
}

impl CacheOptions {
    pub fn new(expire: Duration) -> Self {
        Self { expire }
    }
}

/// State carried by the middleware: the cache store handle plus options
#[derive(Debug, Clone)]
pub struct RequestCache {
    cache: Arc<dyn Cache>,
    options: CacheOptions,
}

impl RequestCache {
    pub fn new(cache: Arc<dyn Cache>, options: CacheOptions) -> Self {
        Self { cache, options }
    }
}

/// Where a cached-route payload came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseSource {
    #[serde(rename = "API")]
    Api,
    #[serde(rename = "cache")]
    Cache,
}

/// Envelope for responses served through the caching middleware
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedResponse {
    pub source: ResponseSource,
    pub data: Value,
}

/// Read-through caching over the wrapped route.
///
/// Apply per-route with `axum::middleware::from_fn_with_state`.
pub async fn read_through_cache(
    State(layer): State<RequestCache>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let key = request_cache_key(request.uri().path(), request.uri().query());

    if let Some(cached) = layer.cache.get_raw(&key).await? {
        debug!(key = %key, "Cache hit");

        let data: Value = serde_json::from_str(&cached).map_err(|e| {
            DomainError::cache(format!("Corrupt cached payload for '{}': {}", key, e))
        })?;

        return Ok((
            StatusCode::OK,
            Json(CachedResponse {
                source: ResponseSource::Cache,
                data,
            }),
        )
            .into_response());
    }

    debug!(key = %key, "Cache miss");
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, MAX_CACHEABLE_BODY_BYTES)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to buffer response body: {}", e)))?;

    if !parts.status.is_success() {
        // Never cached; relayed to the caller unchanged
        return Ok(Response::from_parts(parts, Body::from(bytes)));
    }

    let text = std::str::from_utf8(&bytes).map_err(|e| {
        DomainError::cache(format!("Response body for '{}' is not UTF-8: {}", key, e))
    })?;
    let data: Value = serde_json::from_str(text).map_err(|e| {
        DomainError::cache(format!("Response body for '{}' is not JSON: {}", key, e))
    })?;

    // Stored before the relay; a failed write fails the request
    layer.cache.set_raw(&key, text, layer.options.expire).await?;

    Ok((
        parts.status,
        Json(CachedResponse {
            source: ResponseSource::Api,
            data,
        }),
    )
        .into_response())
}
