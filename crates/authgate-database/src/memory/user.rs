//! In-memory user store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use authgate_core::error::AppError;
use authgate_core::result::AppResult;
use authgate_core::types::UserId;
use authgate_entity::user::{NewUser, User, UserChanges};

use super::MemoryClientStore;
use crate::store::UserStore;

/// [`UserStore`] kept in a `HashMap` behind a tokio `RwLock`.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
    clients: Option<Arc<MemoryClientStore>>,
}

impl MemoryUserStore {
    /// Create an empty store with no linked client store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store whose deletes cascade into `clients`.
    pub fn with_clients(clients: Arc<MemoryClientStore>) -> Self {
        Self {
            users: RwLock::default(),
            clients: Some(clients),
        }
    }
}

fn check_non_empty(field: &str, value: &str) -> AppResult<()> {
    if value.is_empty() {
        return Err(AppError::invalid_data(format!("User {field} must not be empty")));
    }
    Ok(())
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: NewUser) -> AppResult<User> {
        check_non_empty("name", &user.name)?;
        check_non_empty("account", &user.account)?;

        let mut users = self.users.write().await;
        if users.contains_key(&user.id) || users.values().any(|u| u.account == user.account) {
            return Err(AppError::already_exists(format!(
                "Failed to create user '{}': already exists",
                user.account
            )));
        }

        let now = Utc::now();
        let created = User {
            id: user.id,
            name: user.name,
            account: user.account,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        };
        users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: UserId) -> AppResult<User> {
        self.users
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    async fn get_by_account(&self, account: &str) -> AppResult<User> {
        self.users
            .read()
            .await
            .values()
            .find(|u| u.account == account)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("User '{account}' not found")))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by_key(|u| u.created_at);
        Ok(users)
    }

    async fn update(&self, id: UserId, changes: UserChanges) -> AppResult<User> {
        if changes.is_empty() {
            return Err(AppError::invalid_data("No fields to update"));
        }
        if let Some(name) = &changes.name {
            check_non_empty("name", name)?;
        }

        let mut users = self.users.write().await;
        let user = users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;

        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(password_hash) = changes.password_hash {
            user.password_hash = password_hash;
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> AppResult<()> {
        let mut users = self.users.write().await;
        if users.remove(&id).is_none() {
            return Err(AppError::not_found(format!("User {id} not found")));
        }

        if let Some(clients) = &self.clients {
            let removed = clients.remove_owned_by(id).await;
            debug!(user_id = %id, removed, "Cascaded user delete to clients");
        }
        Ok(())
    }
}
