//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use authgate_auth::jwt::{TokenIssuer, TokenVerifier};
use authgate_auth::password::CredentialHasher;
use authgate_core::config::AppConfig;
use authgate_core::result::AppResult;
use authgate_database::DatabasePool;
use authgate_database::store::{ClientStore, UserStore};
use authgate_service::{AdminUserService, ClientService, ResourceService, UserAuthService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL pool, absent when running on in-memory stores.
    pub db: Option<DatabasePool>,

    // ── Auth ─────────────────────────────────────────────────
    pub token_issuer: Arc<TokenIssuer>,
    pub token_verifier: Arc<TokenVerifier>,

    // ── Services ─────────────────────────────────────────────
    pub admin_user_service: Arc<AdminUserService>,
    pub user_auth_service: Arc<UserAuthService>,
    pub client_service: Arc<ClientService>,
    pub resource_service: Arc<ResourceService>,
}

impl AppState {
    /// Wires services over the given stores.
    ///
    /// Users and clients get separate hashers so each uses its own pepper.
    pub fn new(
        config: AppConfig,
        users: Arc<dyn UserStore>,
        clients: Arc<dyn ClientStore>,
        db: Option<DatabasePool>,
    ) -> AppResult<Self> {
        let user_hasher = Arc::new(CredentialHasher::new(
            config.auth.user_pepper.clone(),
            &config.auth,
        )?);
        let client_hasher = Arc::new(CredentialHasher::new(
            config.auth.client_pepper.clone(),
            &config.auth,
        )?);

        let token_issuer = Arc::new(TokenIssuer::new(&config.auth)?);
        let token_verifier = Arc::new(TokenVerifier::new(&config.auth));

        let admin_user_service = Arc::new(AdminUserService::new(
            Arc::clone(&users),
            Arc::clone(&user_hasher),
        ));
        let user_auth_service = Arc::new(UserAuthService::new(users, user_hasher));
        let client_service = Arc::new(ClientService::new(clients, client_hasher));
        let resource_service = Arc::new(ResourceService::new());

        Ok(Self {
            config: Arc::new(config),
            db,
            token_issuer,
            token_verifier,
            admin_user_service,
            user_auth_service,
            client_service,
            resource_service,
        })
    }
}
