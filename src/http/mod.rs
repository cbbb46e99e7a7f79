//! HTTP surface - CRUD over the tariff store behind an API key gate.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `POST /tariffs`, `GET|PUT|DELETE /tariffs/:id` - manual CRUD (key required).
//! - `GET /dummy-list-all-tariffs` - every stored tariff (public).
//! - `GET /dummy-remote-tariffs` - stand-in remote feed (public).
//! - `GET /v3/api-docs` - OpenAPI document (public).
//! - `GET /health` - liveness (public).
//!
//! ## Example
//!
//! ```ignore
//! use tariff_sync::http::{self, AppState};
//! use tariff_sync::TariffStore;
//!
//! let state = AppState::new(TariffStore::new(), Some("secret".into()));
//! let app = http::router(state.clone());
//!
//! // Or serve directly until ctrl-c
//! http::serve(state, "0.0.0.0:8080", async {
//!     let _ = tokio::signal::ctrl_c().await;
//! }).await?;
//! ```

mod auth;
mod error;
mod handlers;
mod openapi;

use std::future::Future;
use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use tracing::info;

use crate::store::TariffStore;

pub use auth::{is_public, API_KEY_HEADER, PUBLIC_PREFIXES};
pub use error::ApiError;
pub use openapi::document as openapi_document;

/// Shared handler state: the store handle and the expected API key.
#[derive(Clone)]
pub struct AppState {
    store: TariffStore,
    api_key: Option<Arc<str>>,
}

impl AppState {
    pub fn new(store: TariffStore, api_key: Option<String>) -> Self {
        Self {
            store,
            api_key: api_key.map(Arc::from),
        }
    }

    pub fn store(&self) -> &TariffStore {
        &self.store
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

/// Build the axum `Router` for the tariff API.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/tariffs", post(handlers::create_tariff))
        .route(
            "/tariffs/:id",
            get(handlers::get_tariff)
                .put(handlers::update_tariff)
                .delete(handlers::delete_tariff),
        )
        .route("/dummy-list-all-tariffs", get(handlers::list_all_tariffs))
        .route("/dummy-remote-tariffs", get(handlers::dummy_remote_tariffs))
        .route("/v3/api-docs", get(handlers::api_docs))
        .layer(from_fn_with_state(state.clone(), auth::require_api_key))
        .with_state(state)
}

/// Serve the API at `addr` until `shutdown` resolves.
pub async fn serve<F>(state: AppState, addr: &str, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "tariff api listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
