//! Cross-origin policy for the browser client.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;

/// Preflight answers are cached by browsers for this long.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(3600);

/// Allow credentialed requests from `origins` for exactly the `methods` the
/// API mounts.
pub fn cors_layer(origins: &[HeaderValue], methods: Vec<Method>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins.to_vec())
        .allow_methods(methods)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(PREFLIGHT_MAX_AGE)
}
