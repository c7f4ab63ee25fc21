//! Machine client management: create, login, list, scope changes, secret rotation.

use std::sync::Arc;

use tracing::{info, warn};

use authgate_auth::password::CredentialHasher;
use authgate_auth::secret::SecretGenerator;
use authgate_core::error::{AppError, ErrorKind};
use authgate_core::result::AppResult;
use authgate_core::types::{ClientId, UserId};
use authgate_database::store::ClientStore;
use authgate_entity::client::{Client, ClientChanges, NewClient};
use authgate_entity::permission::Permission;

const INVALID_CREDENTIALS: &str = "Invalid client id or secret";

/// A client together with its plaintext secret.
///
/// Only returned from creation and rotation; the secret is never stored or
/// retrievable afterwards.
#[derive(Debug, Clone)]
pub struct IssuedClient {
    pub client: Client,
    pub secret: String,
}

/// Manages machine clients owned by users.
///
/// Every owner-scoped operation reports a client owned by someone else as
/// `NotFound`, indistinguishable from a missing one.
#[derive(Debug, Clone)]
pub struct ClientService {
    clients: Arc<dyn ClientStore>,
    /// Hasher seeded with the client pepper.
    hasher: Arc<CredentialHasher>,
    secrets: SecretGenerator,
}

fn scope_strings(scope: &[Permission]) -> AppResult<Vec<String>> {
    if scope.is_empty() {
        return Err(AppError::invalid_data("Client scope must not be empty"));
    }
    let mut unique: Vec<String> = Vec::with_capacity(scope.len());
    for permission in scope {
        let value = permission.as_str().to_string();
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    Ok(unique)
}

impl ClientService {
    /// Creates a new client service.
    pub fn new(clients: Arc<dyn ClientStore>, hasher: Arc<CredentialHasher>) -> Self {
        Self {
            clients,
            hasher,
            secrets: SecretGenerator::new(),
        }
    }

    /// Registers a client for `owner` with a freshly generated secret.
    pub async fn create_client(&self, owner: UserId, scope: &[Permission]) -> AppResult<IssuedClient> {
        let scope = scope_strings(scope)?;
        let secret = self.secrets.generate();
        let secret_hash = self.hasher.hash(&secret).await?;

        let client = self
            .clients
            .create(NewClient {
                id: ClientId::new(),
                user_id: owner,
                scope,
                secret_hash,
            })
            .await?;

        info!(client_id = %client.id, user_id = %owner, scope = %client.scope_string(), "Client created");
        Ok(IssuedClient { client, secret })
    }

    /// Returns the client if `secret` matches.
    ///
    /// A missing client and a wrong secret both yield `LoginFailure`.
    pub async fn login(&self, id: ClientId, secret: &str) -> AppResult<Client> {
        let client = match self.clients.get_by_id(id).await {
            Ok(client) => client,
            Err(e) if e.is(ErrorKind::NotFound) => {
                self.hasher.verify_decoy(secret).await?;
                warn!(client_id = %id, "Client login failed: unknown client");
                return Err(AppError::login_failure(INVALID_CREDENTIALS));
            }
            Err(e) => return Err(e),
        };

        if !self.hasher.verify(&client.secret_hash, secret).await? {
            warn!(client_id = %id, "Client login failed: wrong secret");
            return Err(AppError::login_failure(INVALID_CREDENTIALS));
        }

        info!(client_id = %id, "Client logged in");
        Ok(client)
    }

    /// Lists the clients owned by `owner`.
    pub async fn list_clients(&self, owner: UserId) -> AppResult<Vec<Client>> {
        self.clients.list_by_user(owner).await
    }

    /// Gets a client owned by `owner`.
    pub async fn get_client(&self, id: ClientId, owner: UserId) -> AppResult<Client> {
        let client = self.clients.get_by_id(id).await?;
        if client.user_id != owner {
            return Err(AppError::not_found(format!("Client {id} not found")));
        }
        Ok(client)
    }

    /// Replaces the scope of a client owned by `owner`.
    pub async fn update_scope(
        &self,
        id: ClientId,
        owner: UserId,
        scope: &[Permission],
    ) -> AppResult<Client> {
        let scope = scope_strings(scope)?;
        let client = self
            .clients
            .update_owned(
                id,
                owner,
                ClientChanges {
                    scope: Some(scope),
                    secret_hash: None,
                },
            )
            .await?;

        info!(client_id = %id, scope = %client.scope_string(), "Client scope updated");
        Ok(client)
    }

    /// Replaces the secret of a client owned by `owner`. The old secret
    /// stops working immediately.
    pub async fn rotate_secret(&self, id: ClientId, owner: UserId) -> AppResult<IssuedClient> {
        let secret = self.secrets.generate();
        let secret_hash = self.hasher.hash(&secret).await?;

        let client = self
            .clients
            .update_owned(
                id,
                owner,
                ClientChanges {
                    scope: None,
                    secret_hash: Some(secret_hash),
                },
            )
            .await?;

        info!(client_id = %id, "Client secret rotated");
        Ok(IssuedClient { client, secret })
    }

    /// Deletes a client owned by `owner`.
    pub async fn delete_client(&self, id: ClientId, owner: UserId) -> AppResult<()> {
        self.clients.delete_owned(id, owner).await?;
        info!(client_id = %id, user_id = %owner, "Client deleted");
        Ok(())
    }
}
