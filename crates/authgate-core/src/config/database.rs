//! Database configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, ErrorKind};
use crate::result::AppResult;

/// PostgreSQL connection and pool configuration.
///
/// Either set `url` directly, or set the individual connection fields and
/// let [`DatabaseConfig::connection_url`] assemble them.
#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Full PostgreSQL connection URL. Takes precedence over the fields below.
    #[serde(default)]
    pub url: Option<String>,
    /// Server host name.
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Database name.
    #[serde(default)]
    pub database: String,
    /// Login role.
    #[serde(default)]
    pub username: String,
    /// Login password.
    #[serde(default)]
    pub password: String,
    /// Extra connection parameters appended as the query string (e.g. `sslmode`).
    #[serde(default)]
    pub query: BTreeMap<String, String>,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// How long to wait for a free connection, in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Idle connection timeout in seconds.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
    /// Apply pending migrations when the server starts.
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    /// Resolve the `postgresql://` URL used to open the pool.
    pub fn connection_url(&self) -> AppResult<String> {
        if let Some(url) = self.url.as_deref().filter(|u| !u.trim().is_empty()) {
            Url::parse(url).map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "database.url is not a valid URL", e)
            })?;
            return Ok(url.to_string());
        }

        if self.database.is_empty() {
            return Err(AppError::configuration(
                "either database.url or database.database must be set",
            ));
        }

        let mut url = Url::parse(&format!("postgresql://{}:{}", self.host, self.port))
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "invalid database.host", e)
            })?;

        if !self.username.is_empty() {
            url.set_username(&self.username)
                .map_err(|()| AppError::configuration("invalid database.username"))?;
        }
        if !self.password.is_empty() {
            url.set_password(Some(&self.password))
                .map_err(|()| AppError::configuration("invalid database.password"))?;
        }
        url.set_path(&format!("/{}", self.database));

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }

        Ok(url.to_string())
    }

    /// The connection URL with its password replaced, for logs and CLI output.
    pub fn masked_url(&self) -> String {
        match self.connection_url().and_then(|raw| {
            Url::parse(&raw).map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "invalid database url", e)
            })
        }) {
            Ok(mut url) => {
                if url.password().is_some() {
                    let _ = url.set_password(Some("****"));
                }
                url.to_string()
            }
            Err(_) => "<invalid database url>".to_string(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: default_host(),
            port: default_port(),
            database: String::new(),
            username: String::new(),
            password: String::new(),
            query: BTreeMap::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_seconds: default_connect_timeout(),
            idle_timeout_seconds: default_idle_timeout(),
            run_migrations: default_run_migrations(),
        }
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.masked_url())
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("connect_timeout_seconds", &self.connect_timeout_seconds)
            .field("idle_timeout_seconds", &self.idle_timeout_seconds)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_max_connections() -> u32 {
    15
}

fn default_min_connections() -> u32 {
    5
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    300
}

fn default_run_migrations() -> bool {
    true
}
