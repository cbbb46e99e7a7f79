//! Axum handlers for the tariff API, the dummy feeds and the OpenAPI document.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use super::error::ApiError;
use super::openapi;
use super::AppState;
use crate::dummy;
use crate::store::StoreError;
use crate::tariff::{Tariff, TariffInput};

/// `POST /tariffs` - assign a local id and store the record.
pub async fn create_tariff(
    State(state): State<AppState>,
    Json(input): Json<TariffInput>,
) -> Result<Json<Tariff>, ApiError> {
    Ok(Json(state.store().create(input)?))
}

/// `GET /tariffs/:id`
pub async fn get_tariff(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Tariff>, ApiError> {
    state
        .store()
        .get(id)?
        .map(Json)
        .ok_or_else(|| StoreError::NotFound(id).into())
}

/// `PUT /tariffs/:id` - replace the whole record, remote id included.
pub async fn update_tariff(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(input): Json<TariffInput>,
) -> Result<Json<Tariff>, ApiError> {
    Ok(Json(state.store().replace(id, input)?))
}

/// `DELETE /tariffs/:id` - returns the removed record.
pub async fn delete_tariff(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Tariff>, ApiError> {
    Ok(Json(state.store().delete(id)?))
}

/// `GET /dummy-list-all-tariffs`
pub async fn list_all_tariffs(State(state): State<AppState>) -> Result<Json<Vec<Tariff>>, ApiError> {
    Ok(Json(state.store().all()?))
}

/// `GET /dummy-remote-tariffs` - a fresh random batch in the remote feed shape.
pub async fn dummy_remote_tariffs() -> Json<Vec<Tariff>> {
    let mut rng = rand::thread_rng();
    Json(dummy::remote_tariffs(&mut rng, &dummy::timestamp_now()))
}

/// `GET /v3/api-docs`
pub async fn api_docs() -> Json<Value> {
    Json(openapi::document())
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let tariffs = state.store().len().ok();
    Json(json!({ "ok": tariffs.is_some(), "tariffs": tariffs }))
}
