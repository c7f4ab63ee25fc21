//! Persistence capabilities for users and clients.
//!
//! Adapters classify their failures exactly once:
//!
//! | condition                                  | kind            |
//! |--------------------------------------------|-----------------|
//! | uniqueness violation                       | `AlreadyExists` |
//! | check / foreign-key violation, empty patch | `InvalidData`   |
//! | no row read, updated, or deleted           | `NotFound`      |
//! | anything else                              | `Store`         |
//!
//! Every operation is a single statement.

use async_trait::async_trait;

use authgate_core::result::AppResult;
use authgate_core::types::{ClientId, UserId};
use authgate_entity::client::{Client, ClientChanges, NewClient};
use authgate_entity::user::{NewUser, User, UserChanges};

/// Storage for [`User`] rows.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a user. Fails with `AlreadyExists` if the account is taken.
    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// Fetch a user by id.
    async fn get_by_id(&self, id: UserId) -> AppResult<User>;

    /// Fetch a user by account name.
    async fn get_by_account(&self, account: &str) -> AppResult<User>;

    /// List every user, oldest first.
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Apply `changes` to the user and return the updated row.
    async fn update(&self, id: UserId, changes: UserChanges) -> AppResult<User>;

    /// Delete a user and, by cascade, its clients.
    async fn delete(&self, id: UserId) -> AppResult<()>;
}

/// Storage for [`Client`] rows.
///
/// Mutations are scoped to the `(client id, owner id)` pair: a client that
/// exists under another owner is reported as `NotFound`.
#[async_trait]
pub trait ClientStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a client.
    async fn create(&self, client: NewClient) -> AppResult<Client>;

    /// Fetch a client by id regardless of owner. Used for client login.
    async fn get_by_id(&self, id: ClientId) -> AppResult<Client>;

    /// List clients owned by `user_id`, oldest first. Empty if none.
    async fn list_by_user(&self, user_id: UserId) -> AppResult<Vec<Client>>;

    /// Apply `changes` to the client if it is owned by `user_id`.
    async fn update_owned(
        &self,
        id: ClientId,
        user_id: UserId,
        changes: ClientChanges,
    ) -> AppResult<Client>;

    /// Delete the client if it is owned by `user_id`.
    async fn delete_owned(&self, id: ClientId, user_id: UserId) -> AppResult<()>;
}
