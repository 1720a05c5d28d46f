use axum::extract::{Path, State};
use axum::response::Response;

use crate::error::ApiError;
use crate::middleware::auth::RequireAdmin;
use crate::middleware::json::ValidJson;
use crate::response::{created, messages, success};
use crate::router::AppState;
use crate::service;
use crate::types::orders::{EnquiryCreate, EnquiryUpdate};

/// Public endpoint: anyone can ask about a car.
pub async fn create(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<EnquiryCreate>,
) -> Result<Response, ApiError> {
    let enquiry = service::orders::create_enquiry(&state.store, payload).await?;
    Ok(created(enquiry, messages::ENQUIRY_CREATED))
}

pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Response, ApiError> {
    let rows = state.store.list_enquiries().await?;
    Ok(success(rows, messages::SUCCESS))
}

pub async fn update_status(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
    ValidJson(payload): ValidJson<EnquiryUpdate>,
) -> Result<Response, ApiError> {
    let enquiry = state
        .store
        .update_enquiry(id, payload.status, payload.admin_notes.as_deref())
        .await?
        .ok_or_else(|| ApiError::not_found("Enquiry"))?;
    Ok(success(enquiry, messages::ENQUIRY_UPDATED))
}
