//! PostgreSQL client store.

use async_trait::async_trait;
use sqlx::PgPool;

use authgate_core::error::AppError;
use authgate_core::result::AppResult;
use authgate_core::types::{ClientId, UserId};
use authgate_entity::client::{Client, ClientChanges, NewClient};

use super::error::classify;
use crate::store::ClientStore;

const CLIENT_COLUMNS: &str = "id, user_id, scope, secret_hash, created_at, updated_at";

/// [`ClientStore`] backed by the `clients` table.
///
/// Owner scoping is part of every mutating statement's `WHERE` clause, so
/// the ownership check and the write are one atomic step.
#[derive(Debug, Clone)]
pub struct PgClientStore {
    pool: PgPool,
}

impl PgClientStore {
    /// Create a new client store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientStore for PgClientStore {
    async fn create(&self, client: NewClient) -> AppResult<Client> {
        sqlx::query_as::<_, Client>(&format!(
            "INSERT INTO clients (id, user_id, scope, secret_hash) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {CLIENT_COLUMNS}"
        ))
        .bind(client.id)
        .bind(client.user_id)
        .bind(&client.scope)
        .bind(&client.secret_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(e, "Failed to create client"))
    }

    async fn get_by_id(&self, id: ClientId) -> AppResult<Client> {
        sqlx::query_as::<_, Client>(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| classify(e, "Failed to find client by id"))?
        .ok_or_else(|| AppError::not_found(format!("Client {id} not found")))
    }

    async fn list_by_user(&self, user_id: UserId) -> AppResult<Vec<Client>> {
        sqlx::query_as::<_, Client>(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients WHERE user_id = $1 \
             ORDER BY created_at ASC, id ASC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| classify(e, "Failed to list clients"))
    }

    async fn update_owned(
        &self,
        id: ClientId,
        user_id: UserId,
        changes: ClientChanges,
    ) -> AppResult<Client> {
        if changes.is_empty() {
            return Err(AppError::invalid_data("No fields to update"));
        }

        sqlx::query_as::<_, Client>(&format!(
            "UPDATE clients SET \
                scope = COALESCE($3, scope), \
                secret_hash = COALESCE($4, secret_hash), \
                updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {CLIENT_COLUMNS}"
        ))
        .bind(id)
        .bind(user_id)
        .bind(&changes.scope)
        .bind(&changes.secret_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| classify(e, "Failed to update client"))?
        .ok_or_else(|| AppError::not_found(format!("Client {id} not found")))
    }

    async fn delete_owned(&self, id: ClientId, user_id: UserId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| classify(e, "Failed to delete client"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Client {id} not found")));
        }
        Ok(())
    }
}
