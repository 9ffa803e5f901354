//! Application state for shared services

use std::sync::Arc;

use crate::domain::cache::Cache;
use crate::domain::rates::RateProvider;
use crate::domain::user::UserRepository;

/// Shared handles injected into handlers and middleware.
///
/// Built once at startup; every field is a process-wide resource safe for
/// concurrent use.
#[derive(Debug, Clone)]
pub struct AppState {
    pub cache: Arc<dyn Cache>,
    pub rate_provider: Arc<dyn RateProvider>,
    pub user_repository: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(
        cache: Arc<dyn Cache>,
        rate_provider: Arc<dyn RateProvider>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            cache,
            rate_provider,
            user_repository,
        }
    }
}
