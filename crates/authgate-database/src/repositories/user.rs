//! PostgreSQL user store.

use async_trait::async_trait;
use sqlx::PgPool;

use authgate_core::error::AppError;
use authgate_core::result::AppResult;
use authgate_core::types::UserId;
use authgate_entity::user::{NewUser, User, UserChanges};

use super::error::classify;
use crate::store::UserStore;

const USER_COLUMNS: &str = "id, name, account, password_hash, created_at, updated_at";

/// [`UserStore`] backed by the `users` table.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Create a new user store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, user: NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (id, name, account, password_hash) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.account)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(e, &format!("Failed to create user '{}'", user.account)))
    }

    async fn get_by_id(&self, id: UserId) -> AppResult<User> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify(e, "Failed to find user by id"))?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    async fn get_by_account(&self, account: &str) -> AppResult<User> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE account = $1"
        ))
        .bind(account)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| classify(e, "Failed to find user by account"))?
        .ok_or_else(|| AppError::not_found(format!("User '{account}' not found")))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| classify(e, "Failed to list users"))
    }

    async fn update(&self, id: UserId, changes: UserChanges) -> AppResult<User> {
        if changes.is_empty() {
            return Err(AppError::invalid_data("No fields to update"));
        }

        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET \
                name = COALESCE($2, name), \
                password_hash = COALESCE($3, password_hash), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| classify(e, "Failed to update user"))?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    async fn delete(&self, id: UserId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| classify(e, "Failed to delete user"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User {id} not found")));
        }
        Ok(())
    }
}
