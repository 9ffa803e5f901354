//! User profile endpoints

use axum::extract::{Path, State};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, UpdateBioRequest, UpdateBioResponse};
use crate::domain::user::UserProfile;

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserProfile>, ApiError> {
    debug!(user_id = id, "Fetching user profile");

    let user = state
        .user_repository
        .get(id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(user))
}

/// PUT /users/{id}/bio
pub async fn update_bio(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateBioRequest>,
) -> Result<Json<UpdateBioResponse>, ApiError> {
    debug!(user_id = id, "Updating user bio");

    let bio = request.bio.trim();

    let user = state
        .user_repository
        .update_bio(id, bio)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(UpdateBioResponse::updated(user)))
}
