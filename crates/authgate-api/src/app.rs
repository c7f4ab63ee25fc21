//! Application builder and server runner.

use std::future::IntoFuture;
use std::time::Duration;

use axum::Router;
use axum::middleware as axum_middleware;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use authgate_core::error::{AppError, ErrorKind};
use authgate_core::result::AppResult;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Serves `app` until Ctrl+C or SIGTERM.
///
/// In-flight requests get `grace` to finish after the signal; the server
/// future is dropped once it elapses.
pub async fn serve(listener: TcpListener, app: Router, grace: Duration) -> AppResult<()> {
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = shutdown_tx.send(true);
        })
        .into_future();
    tokio::pin!(server);

    let result = tokio::select! {
        biased;
        result = &mut server => result,
        Ok(()) = shutdown_rx.changed() => {
            info!(grace_seconds = grace.as_secs(), "Draining in-flight requests");
            match tokio::time::timeout(grace, &mut server).await {
                Ok(result) => result,
                Err(_) => {
                    warn!("Shutdown grace period elapsed; dropping remaining connections");
                    Ok(())
                }
            }
        }
    };

    result.map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;
    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
