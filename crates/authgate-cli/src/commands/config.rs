//! Configuration inspection CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use authgate_core::config::AppConfig;
use authgate_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Load and validate the configuration
    Validate,
    /// Print the database connection URL
    DbUrl {
        /// Print the password instead of masking it
        #[arg(long)]
        reveal: bool,
    },
}

/// Execute config commands
pub async fn execute(args: &ConfigArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Validate => {
            let config = match super::load_config(env) {
                Ok(config) => config,
                Err(e) => {
                    output::print_error(&format!("Configuration '{env}' is invalid"));
                    return Err(e);
                }
            };

            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&summary(&config))?;
                    println!("{json}");
                }
                OutputFormat::Table => {
                    output::print_success(&format!("Configuration '{env}' is valid"));
                    output::print_kv(
                        "Server",
                        &format!("{}:{}", config.server.host, config.server.port),
                    );
                    output::print_kv("Database", &config.database.masked_url());
                    output::print_kv("Issuer", &config.auth.issuer);
                    output::print_kv(
                        "Token TTL",
                        &format!("{}s", config.auth.token_ttl_seconds),
                    );
                }
            }
        }
        ConfigCommand::DbUrl { reveal } => {
            let config = AppConfig::load(env)?;
            if *reveal {
                println!("{}", config.database.connection_url()?);
            } else {
                config.database.connection_url()?;
                println!("{}", config.database.masked_url());
            }
        }
    }

    Ok(())
}

fn summary(config: &AppConfig) -> serde_json::Value {
    serde_json::json!({
        "server": format!("{}:{}", config.server.host, config.server.port),
        "database": config.database.masked_url(),
        "issuer": config.auth.issuer,
        "token_ttl_seconds": config.auth.token_ttl_seconds,
    })
}
