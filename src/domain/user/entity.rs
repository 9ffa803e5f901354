//! User profile entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user profile as stored in the relational store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    /// Free-text biography; trimmed before persisting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            id,
            username: username.into(),
            bio: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the bio, trimming surrounding whitespace
    pub fn set_bio(&mut self, bio: impl AsRef<str>) {
        self.bio = Some(bio.as_ref().trim().to_string());
        self.updated_at = Utc::now();
    }
}
