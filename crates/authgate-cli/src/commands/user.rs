//! User management CLI commands.
//!
//! `user create` is how the first administrator is bootstrapped, since the
//! HTTP user routes already require a `*` token.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use authgate_core::error::AppError;
use authgate_core::types::UserId;
use authgate_database::repositories::PgUserStore;
use authgate_entity::user::User;
use authgate_service::AdminUserService;

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create a user
    Create {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Login account
        #[arg(short, long)]
        account: String,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// List all users
    List,
    /// Show a single user
    Show {
        /// User ID
        id: UserId,
    },
    /// Delete a user and their clients
    Delete {
        /// User ID
        id: UserId,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: String,
    name: String,
    account: String,
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.to_string(),
            name: u.name.clone(),
            account: u.account.clone(),
            created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(args: &UserArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let db = super::connect(&config).await?;
    let service = AdminUserService::new(
        Arc::new(PgUserStore::new(db.pool().clone())),
        super::hasher(&config.auth.user_pepper, &config)?,
    );

    let result = run(&args.command, &service, format).await;
    db.close().await;
    result
}

async fn run(
    command: &UserCommand,
    service: &AdminUserService,
    format: OutputFormat,
) -> Result<(), AppError> {
    match command {
        UserCommand::Create {
            name,
            account,
            password,
        } => {
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let user = service.create_user(name, account, &password).await?;
            output::print_success(&format!("User '{}' created", user.account));
            output::print_item(&UserRow::from(&user), format);
        }
        UserCommand::List => {
            let users = service.list_users().await?;
            let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
            output::print_list(&rows, format);
        }
        UserCommand::Show { id } => {
            let user = service.get_user(*id).await?;
            output::print_item(&UserRow::from(&user), format);
        }
        UserCommand::Delete { id, force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete user {id} and all of their clients?"))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

                if !confirm {
                    output::print_warning("Cancelled.");
                    return Ok(());
                }
            }

            service.delete_user(*id).await?;
            output::print_success(&format!("User {id} deleted"));
        }
    }

    Ok(())
}
