//! Per-request access log.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{error, info, warn};

/// Logs method, route, status and latency once the response is ready.
///
/// The route template (`/clients/{client_id}`) is logged when the request
/// matched one, so ids stay out of the aggregate. 5xx responses log at
/// error, 4xx at warn.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let latency_ms = started.elapsed().as_millis() as u64;

    match status {
        500.. => error!(%method, %route, status, latency_ms, "HTTP request"),
        400..=499 => warn!(%method, %route, status, latency_ms, "HTTP request"),
        _ => info!(%method, %route, status, latency_ms, "HTTP request"),
    }

    response
}
