//! Admin user management: create, read, update, delete, list.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use authgate_auth::password::CredentialHasher;
use authgate_core::error::AppError;
use authgate_core::result::AppResult;
use authgate_core::types::UserId;
use authgate_database::store::UserStore;
use authgate_entity::user::{NewUser, User, UserChanges};

/// Partial update of a user. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    /// New plaintext password; hashed before it reaches the store.
    pub password: Option<String>,
}

impl UserPatch {
    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.password.is_none()
    }
}

/// Handles administrative user management operations.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    users: Arc<dyn UserStore>,
    /// Hasher seeded with the user pepper.
    hasher: Arc<CredentialHasher>,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(users: Arc<dyn UserStore>, hasher: Arc<CredentialHasher>) -> Self {
        Self { users, hasher }
    }

    /// Creates a user with a fresh id and a hashed password.
    pub async fn create_user(&self, name: &str, account: &str, password: &str) -> AppResult<User> {
        let password_hash = self.hasher.hash(password).await?;

        let user = self
            .users
            .create(NewUser {
                id: UserId::new(),
                name: name.to_string(),
                account: account.to_string(),
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, account = %user.account, "User created");
        Ok(user)
    }

    /// Gets a single user by id.
    pub async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.users.get_by_id(id).await
    }

    /// Lists all users, oldest first.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.list().await
    }

    /// Applies a partial update. A new password is hashed first.
    pub async fn update_user(&self, id: UserId, patch: UserPatch) -> AppResult<User> {
        if patch.is_empty() {
            return Err(AppError::invalid_data("No fields to update"));
        }

        let password_hash = match patch.password.as_deref() {
            Some(password) => Some(self.hasher.hash(password).await?),
            None => None,
        };

        let user = self
            .users
            .update(
                id,
                UserChanges {
                    name: patch.name,
                    password_hash,
                },
            )
            .await?;

        info!(user_id = %id, "User updated");
        Ok(user)
    }

    /// Deletes a user. Their clients are removed with them.
    pub async fn delete_user(&self, id: UserId) -> AppResult<()> {
        self.users.delete(id).await?;
        info!(user_id = %id, "User deleted");
        Ok(())
    }
}
