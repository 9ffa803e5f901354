//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::user::{UserProfile, UserRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_profile(row: &sqlx::postgres::PgRow) -> Result<UserProfile, DomainError> {
    Ok(UserProfile {
        id: row
            .try_get("id")
            .map_err(|e| DomainError::storage(format!("Invalid user row: {}", e)))?,
        username: row
            .try_get("username")
            .map_err(|e| DomainError::storage(format!("Invalid user row: {}", e)))?,
        bio: row
            .try_get("bio")
            .map_err(|e| DomainError::storage(format!("Invalid user row: {}", e)))?,
        created_at: row
            .try_get("created_at")
            .map_err(|e| DomainError::storage(format!("Invalid user row: {}", e)))?,
        updated_at: row
            .try_get("updated_at")
            .map_err(|e| DomainError::storage(format!("Invalid user row: {}", e)))?,
    })
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn get(&self, id: i64) -> Result<Option<UserProfile>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, bio, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_profile(&row)?)),
            None => Ok(None),
        }
    }

    async fn update_bio(&self, id: i64, bio: &str) -> Result<UserProfile, DomainError> {
        let row = sqlx::query(
            r#"
            UPDATE users
            SET bio = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, username, bio, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(bio)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update user bio: {}", e)))?;

        match row {
            Some(row) => row_to_profile(&row),
            None => Err(DomainError::not_found(format!("User '{}' not found", id))),
        }
    }
}
