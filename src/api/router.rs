use std::time::Duration;

use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers::{greeting, rates, users};
use super::health;
use super::middleware::{read_through_cache, CacheOptions, RequestCache};
use super::state::AppState;

/// Create the application router.
///
/// The exchange-rate route is the only one behind the caching middleware;
/// user routes are served straight from the store so reads always see the
/// latest write.
pub fn create_router(state: AppState, cache_options: CacheOptions) -> Router {
    let request_cache = RequestCache::new(state.cache.clone(), cache_options);

    Router::new()
        .route("/", get(greeting::greeting))
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Cached proxy to the upstream exchange-rate API
        .route(
            "/btc-exchange-rate/",
            get(rates::btc_exchange_rate).layer(middleware::from_fn_with_state(
                request_cache,
                read_through_cache,
            )),
        )
        // User profiles
        .route("/users/{id}", get(users::get_user))
        .route("/users/{id}/bio", put(users::update_bio))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Router with the default TTL, mainly for tests
pub fn create_router_with_defaults(state: AppState) -> Router {
    create_router(state, CacheOptions::default())
}

/// Build cache options from the configured TTL in seconds
pub fn cache_options_from_secs(expire_seconds: u64) -> CacheOptions {
    CacheOptions::new(Duration::from_secs(expire_seconds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::domain::cache::repository::mock::MockCache;
    use crate::domain::rates::mock::MockRateProvider;
    use crate::domain::user::repository::mock::MockUserRepository;
    use crate::domain::user::UserProfile;

    fn test_state(provider: MockRateProvider) -> (AppState, Arc<MockRateProvider>) {
        let provider = Arc::new(provider);
        let state = AppState {
            cache: Arc::new(MockCache::new()),
            rate_provider: provider.clone(),
            user_repository: Arc::new(
                MockUserRepository::new().with_user(UserProfile::new(1, "alice")),
            ),
        };
        (state, provider)
    }

    async fn get_body(router: &Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, value)
    }

    #[tokio::test]
    async fn test_greeting_route() {
        let (state, _) = test_state(MockRateProvider::new());
        let router = create_router_with_defaults(state);

        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Hello, World!");
    }

    #[tokio::test]
    async fn test_exchange_rate_scenario_miss_then_hit() {
        let (state, provider) = test_state(MockRateProvider::new());
        let router = create_router_with_defaults(state);

        let (status, body) = get_body(&router, "/btc-exchange-rate/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "API");
        assert!(body["data"]["rates"].is_object());
        assert_eq!(provider.call_count(), 1);

        // Within the TTL the upstream is not called again
        let (status, body) = get_body(&router, "/btc-exchange-rate/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "cache");
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_not_cached() {
        let (state, provider) = test_state(MockRateProvider::failing());
        let router = create_router_with_defaults(state);

        let (status, body) = get_body(&router, "/btc-exchange-rate/").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["message"], "Unable to fetch data");

        // Failure was not written to the store; next request hits upstream again
        let (status, _) = get_body(&router, "/btc-exchange-rate/").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_get_user_route() {
        let (state, _) = test_state(MockRateProvider::new());
        let router = create_router_with_defaults(state);

        let (status, body) = get_body(&router, "/users/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "alice");

        let (status, body) = get_body(&router, "/users/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["type"], "not_found_error");
    }

    #[tokio::test]
    async fn test_update_bio_route() {
        let (state, _) = test_state(MockRateProvider::new());
        let router = create_router_with_defaults(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/users/1/bio")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"bio": "  hello  "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["message"], "User profile updated");
        assert_eq!(body["user"]["bio"], "hello");
    }

    #[tokio::test]
    async fn test_health_routes() {
        let (state, _) = test_state(MockRateProvider::new());
        let router = create_router_with_defaults(state);

        let (status, _) = get_body(&router, "/health").await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = get_body(&router, "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }
}
