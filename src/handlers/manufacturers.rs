use axum::extract::{Path, State};
use axum::response::Response;

use crate::error::ApiError;
use crate::middleware::auth::RequireAdmin;
use crate::middleware::json::ValidJson;
use crate::response::{created, message_only, messages, success};
use crate::router::AppState;
use crate::types::cars::{ManufacturerPatch, ManufacturerPayload};

pub async fn list(State(state): State<AppState>) -> Result<Response, ApiError> {
    let rows = state.store.list_manufacturers().await?;
    Ok(success(rows, messages::SUCCESS))
}

pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ValidJson(payload): ValidJson<ManufacturerPayload>,
) -> Result<Response, ApiError> {
    let row = state
        .store
        .create_manufacturer(&payload.name, &payload.country)
        .await?;
    Ok(created(row, messages::SUCCESS))
}

pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
    ValidJson(payload): ValidJson<ManufacturerPatch>,
) -> Result<Response, ApiError> {
    let row = state
        .store
        .update_manufacturer(id, payload.name.as_deref(), payload.country.as_deref())
        .await?
        .ok_or_else(|| ApiError::not_found("Manufacturer"))?;
    Ok(success(row, messages::UPDATED))
}

pub async fn destroy(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    if !state.store.delete_manufacturer(id).await? {
        return Err(ApiError::not_found("Manufacturer"));
    }
    Ok(message_only(messages::SUCCESS))
}
