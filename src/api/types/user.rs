//! User endpoint request/response shapes

use serde::{Deserialize, Serialize};

use crate::domain::user::UserProfile;

/// Body of `PUT /users/{id}/bio`
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBioRequest {
    pub bio: String,
}

/// Response of `PUT /users/{id}/bio`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateBioResponse {
    pub message: String,
    pub user: UserProfile,
}

impl UpdateBioResponse {
    pub fn updated(user: UserProfile) -> Self {
        Self {
            message: "User profile updated".to_string(),
            user,
        }
    }
}
