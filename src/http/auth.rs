//! Shared-secret header gate.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use super::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Path prefixes served without a key.
pub const PUBLIC_PREFIXES: &[&str] = &[
    "/swagger-ui",
    "/v3/api-docs",
    "/dummy-list-all-tariffs",
    "/dummy-remote-tariffs",
    "/health",
];

pub fn is_public(path: &str) -> bool {
    PUBLIC_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Let public paths through; everything else needs `X-API-KEY` equal to the
/// configured key. With no key configured nothing protected gets through.
pub async fn require_api_key(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if is_public(req.uri().path()) {
        return next.run(req).await;
    }

    let presented = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());
    let authorized = matches!(
        (state.api_key(), presented),
        (Some(expected), Some(presented)) if expected == presented
    );

    if authorized {
        next.run(req).await
    } else {
        debug!(path = %req.uri().path(), "rejected request without valid api key");
        (StatusCode::UNAUTHORIZED, "Invalid or missing API key").into_response()
    }
}
