//! authgate server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use authgate_api::AppState;
use authgate_core::config::AppConfig;
use authgate_core::error::{AppError, ErrorKind};
use authgate_database::{DatabasePool, PgClientStore, PgUserStore};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration for `AUTHGATE_ENV` and reject unusable settings.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("AUTHGATE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = AppConfig::load(&env)?;
    config.validate()?;
    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting authgate v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;

    if config.database.run_migrations {
        authgate_database::migration::run_migrations(db.pool()).await?;
    } else {
        tracing::info!("Skipping migrations (database.run_migrations = false)");
    }

    // ── Step 2: Stores ───────────────────────────────────────────
    let users = Arc::new(PgUserStore::new(db.pool().clone()));
    let clients = Arc::new(PgClientStore::new(db.pool().clone()));

    // ── Step 3: Services + application state ─────────────────────
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState::new(config, users, clients, Some(db.clone()))?;
    let app = authgate_api::build_app(state);

    // ── Step 4: Bind + serve ─────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e))?;

    tracing::info!("authgate listening on {}", addr);

    authgate_api::serve(listener, app, grace).await?;

    // ── Step 5: Release resources ────────────────────────────────
    db.close().await;

    tracing::info!("authgate shut down gracefully");
    Ok(())
}
