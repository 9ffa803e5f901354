//! HTTP API surface

pub mod handlers;
pub mod health;
pub mod middleware;
pub mod router;
pub mod state;
pub mod types;

pub use router::{cache_options_from_secs, create_router, create_router_with_defaults};
pub use state::AppState;
