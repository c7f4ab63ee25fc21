//! Client management CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use authgate_core::error::AppError;
use authgate_core::types::UserId;
use authgate_database::repositories::PgClientStore;
use authgate_entity::client::Client;
use authgate_entity::permission::Permission;
use authgate_service::ClientService;

/// Arguments for client commands
#[derive(Debug, Args)]
pub struct ClientArgs {
    /// Client subcommand
    #[command(subcommand)]
    pub command: ClientCommand,
}

/// Client subcommands
#[derive(Debug, Subcommand)]
pub enum ClientCommand {
    /// List the clients owned by a user
    List {
        /// Owner user ID
        #[arg(short, long)]
        user: UserId,
    },
    /// Create a client and print its secret once
    Create {
        /// Owner user ID
        #[arg(short, long)]
        user: UserId,
        /// Permissions to grant, e.g. `resource:create` or `*`
        #[arg(short, long, value_delimiter = ',', num_args = 1.., required = true)]
        scope: Vec<Permission>,
    },
}

/// Client display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ClientRow {
    id: String,
    user_id: String,
    scope: String,
    created_at: String,
}

impl From<&Client> for ClientRow {
    fn from(c: &Client) -> Self {
        Self {
            id: c.id.to_string(),
            user_id: c.user_id.to_string(),
            scope: c.scope_string(),
            created_at: c.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute client commands
pub async fn execute(args: &ClientArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let db = super::connect(&config).await?;
    let service = ClientService::new(
        Arc::new(PgClientStore::new(db.pool().clone())),
        super::hasher(&config.auth.client_pepper, &config)?,
    );

    let result = run(&args.command, &service, format).await;
    db.close().await;
    result
}

async fn run(
    command: &ClientCommand,
    service: &ClientService,
    format: OutputFormat,
) -> Result<(), AppError> {
    match command {
        ClientCommand::List { user } => {
            let clients = service.list_clients(*user).await?;
            let rows: Vec<ClientRow> = clients.iter().map(ClientRow::from).collect();
            output::print_list(&rows, format);
        }
        ClientCommand::Create { user, scope } => {
            let issued = service.create_client(*user, scope).await?;
            output::print_success("Client created");
            output::print_item(&ClientRow::from(&issued.client), format);
            output::print_kv("secret", &issued.secret);
            output::print_warning("The secret is shown only once.");
        }
    }

    Ok(())
}
