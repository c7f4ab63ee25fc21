//! In-memory client store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use authgate_core::error::AppError;
use authgate_core::result::AppResult;
use authgate_core::types::{ClientId, UserId};
use authgate_entity::client::{Client, ClientChanges, NewClient};

use crate::store::ClientStore;

/// [`ClientStore`] kept in a `HashMap` behind a tokio `RwLock`.
#[derive(Debug, Default)]
pub struct MemoryClientStore {
    clients: RwLock<HashMap<ClientId, Client>>,
}

impl MemoryClientStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every client owned by `user_id`, returning how many went.
    pub async fn remove_owned_by(&self, user_id: UserId) -> usize {
        let mut clients = self.clients.write().await;
        let before = clients.len();
        clients.retain(|_, c| c.user_id != user_id);
        before - clients.len()
    }
}

fn check_scope(scope: &[String]) -> AppResult<()> {
    if scope.is_empty() {
        return Err(AppError::invalid_data("Client scope must not be empty"));
    }
    Ok(())
}

fn not_found(id: ClientId) -> AppError {
    AppError::not_found(format!("Client {id} not found"))
}

#[async_trait]
impl ClientStore for MemoryClientStore {
    async fn create(&self, client: NewClient) -> AppResult<Client> {
        check_scope(&client.scope)?;

        let mut clients = self.clients.write().await;
        if clients.contains_key(&client.id) {
            return Err(AppError::already_exists(format!(
                "Failed to create client {}: already exists",
                client.id
            )));
        }

        let now = Utc::now();
        let created = Client {
            id: client.id,
            user_id: client.user_id,
            scope: client.scope,
            secret_hash: client.secret_hash,
            created_at: now,
            updated_at: now,
        };
        clients.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: ClientId) -> AppResult<Client> {
        self.clients
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn list_by_user(&self, user_id: UserId) -> AppResult<Vec<Client>> {
        let mut owned: Vec<Client> = self
            .clients
            .read()
            .await
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by_key(|c| c.created_at);
        Ok(owned)
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
        if let Some(scope) = &changes.scope {
            check_scope(scope)?;
        }

        let mut clients = self.clients.write().await;
        let client = clients
            .get_mut(&id)
            .filter(|c| c.user_id == user_id)
            .ok_or_else(|| not_found(id))?;

        if let Some(scope) = changes.scope {
            client.scope = scope;
        }
        if let Some(secret_hash) = changes.secret_hash {
            client.secret_hash = secret_hash;
        }
        client.updated_at = Utc::now();
        Ok(client.clone())
    }

    async fn delete_owned(&self, id: ClientId, user_id: UserId) -> AppResult<()> {
        let mut clients = self.clients.write().await;
        match clients.get(&id) {
            Some(client) if client.user_id == user_id => {
                clients.remove(&id);
                Ok(())
            }
            _ => Err(not_found(id)),
        }
    }
}
