//! Database migration management commands.

use clap::{Args, Subcommand};

use crate::output;
use authgate_core::error::AppError;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, env: &str) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let db = super::connect(&config).await?;

    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            let result = authgate_database::migration::run_migrations(db.pool()).await;
            db.close().await;
            result?;
            output::print_success("All migrations applied successfully.");
        }
    }

    Ok(())
}
