//! Exchange-rate proxy endpoint

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::rates::ExchangeRates;

/// GET /btc-exchange-rate/
///
/// Returns the raw upstream rate table. The route is wrapped by the
/// read-through caching middleware, which owns the `{source, data}` envelope
/// seen by callers.
pub async fn btc_exchange_rate(
    State(state): State<AppState>,
) -> Result<Json<ExchangeRates>, ApiError> {
    debug!("Fetching BTC exchange rates from upstream");

    let rates = state
        .rate_provider
        .exchange_rates()
        .await
        .map_err(ApiError::from)?;

    Ok(Json(rates))
}
