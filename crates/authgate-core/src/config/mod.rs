//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! TOML files plus `AUTHGATE__`-prefixed environment variables. Each
//! sub-module represents a logical configuration section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;
use crate::result::AppResult;

/// Root application configuration.
///
/// Loaded once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Token signing and credential hashing settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default.toml`, then `config/{env}.toml`, then
    /// environment variables such as `AUTHGATE__AUTH__JWT_SECRET`.
    pub fn load(env: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("AUTHGATE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| {
                AppError::with_source(
                    crate::error::ErrorKind::Configuration,
                    format!("Failed to build config: {e}"),
                    e,
                )
            })?;

        config.try_deserialize().map_err(|e| {
            AppError::with_source(
                crate::error::ErrorKind::Configuration,
                format!("Failed to deserialize config: {e}"),
                e,
            )
        })
    }

    /// Reject configurations the server cannot run with.
    pub fn validate(&self) -> AppResult<()> {
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must be set"));
        }
        if self.auth.issuer.trim().is_empty() {
            return Err(AppError::configuration("auth.issuer must be set"));
        }
        if self.auth.token_ttl_seconds == 0 {
            return Err(AppError::configuration(
                "auth.token_ttl_seconds must be greater than zero",
            ));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(AppError::configuration(format!(
                "database.min_connections ({}) exceeds database.max_connections ({})",
                self.database.min_connections, self.database.max_connections
            )));
        }
        self.database.connection_url()?;
        Ok(())
    }
}
