//! CORS layer built from `server.cors`.

use std::str::FromStr;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use authgate_core::config::CorsConfig;

/// `"*"` anywhere in a list means "any".
fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v.trim() == "*")
}

/// Parses each entry, skipping ones that are not valid for `T`.
fn parse_all<T: FromStr>(values: &[String]) -> Vec<T> {
    values
        .iter()
        .filter_map(|v| {
            let parsed = v.trim().parse().ok();
            if parsed.is_none() {
                tracing::warn!(value = %v, "Ignoring invalid CORS entry");
            }
            parsed
        })
        .collect()
}

/// Builds the CORS layer applied to every route.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if is_wildcard(&config.allowed_origins) {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(parse_all::<HeaderValue>(&config.allowed_origins))
    };

    let headers = if is_wildcard(&config.allowed_headers) {
        AllowHeaders::any()
    } else {
        AllowHeaders::list(parse_all::<HeaderName>(&config.allowed_headers))
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(parse_all::<Method>(&config.allowed_methods))
        .allow_headers(headers)
        .max_age(Duration::from_secs(config.max_age_seconds))
}
