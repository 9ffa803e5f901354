//! User repository contract

use std::fmt::Debug;

use async_trait::async_trait;

use super::UserProfile;
use crate::domain::DomainError;

/// Lookup/update interface over the persistent user store
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Fetch a profile by id; `None` when no such user exists
    async fn get(&self, id: i64) -> Result<Option<UserProfile>, DomainError>;

    /// Persist a new bio for an existing user, returning the updated profile.
    /// Fails with `DomainError::NotFound` when the user does not exist.
    async fn update_bio(&self, id: i64, bio: &str) -> Result<UserProfile, DomainError>;
}
