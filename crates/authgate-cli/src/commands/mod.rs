//! CLI command definitions and dispatch.

pub mod client;
pub mod config;
pub mod migrate;
pub mod user;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use authgate_auth::password::CredentialHasher;
use authgate_core::config::AppConfig;
use authgate_core::error::AppError;
use authgate_database::DatabasePool;

/// authgate administration: users, clients, migrations and config
#[derive(Debug, Parser)]
#[command(name = "authgate", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment; selects config/<env>.toml
    #[arg(long = "config-env", default_value = "development")]
    pub config_env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// User management
    User(user::UserArgs),
    /// Client management
    Client(client::ClientArgs),
    /// Configuration inspection
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &self.config_env).await,
            Commands::User(args) => user::execute(args, &self.config_env, self.format).await,
            Commands::Client(args) => client::execute(args, &self.config_env, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config_env, self.format).await,
        }
    }
}

/// Helper: load and validate configuration for `env`
pub fn load_config(env: &str) -> Result<AppConfig, AppError> {
    let config = AppConfig::load(env)?;
    config.validate()?;
    Ok(config)
}

/// Helper: connect to the configured database
pub async fn connect(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}

/// Helper: hasher for `pepper` with the configured work factor
pub fn hasher(pepper: &str, config: &AppConfig) -> Result<Arc<CredentialHasher>, AppError> {
    Ok(Arc::new(CredentialHasher::new(pepper, &config.auth)?))
}
