//! Account + password login.

use std::sync::Arc;

use tracing::{info, warn};

use authgate_auth::password::CredentialHasher;
use authgate_core::error::{AppError, ErrorKind};
use authgate_core::result::AppResult;
use authgate_database::store::UserStore;
use authgate_entity::user::User;

const INVALID_CREDENTIALS: &str = "Invalid account or password";

/// Authenticates human users.
#[derive(Debug, Clone)]
pub struct UserAuthService {
    users: Arc<dyn UserStore>,
    hasher: Arc<CredentialHasher>,
}

impl UserAuthService {
    /// Creates a new login service.
    pub fn new(users: Arc<dyn UserStore>, hasher: Arc<CredentialHasher>) -> Self {
        Self { users, hasher }
    }

    /// Returns the user if `password` matches the stored hash.
    ///
    /// An unknown account and a wrong password both yield `LoginFailure`
    /// with the same message, and both pay for one Argon2 verification.
    pub async fn login(&self, account: &str, password: &str) -> AppResult<User> {
        let user = match self.users.get_by_account(account).await {
            Ok(user) => user,
            Err(e) if e.is(ErrorKind::NotFound) => {
                self.hasher.verify_decoy(password).await?;
                warn!(account = %account, "Login failed: unknown account");
                return Err(AppError::login_failure(INVALID_CREDENTIALS));
            }
            Err(e) => return Err(e),
        };

        if !self.hasher.verify(&user.password_hash, password).await? {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::login_failure(INVALID_CREDENTIALS));
        }

        info!(user_id = %user.id, "User logged in");
        Ok(user)
    }
}
