use axum::extract::{Path, State};
use axum::response::Response;

use crate::error::ApiError;
use crate::middleware::auth::RequireAdmin;
use crate::middleware::json::ValidJson;
use crate::response::{created, messages, success};
use crate::router::AppState;
use crate::service;
use crate::types::orders::{BookingCreate, BookingStatusUpdate};

/// Public endpoint: anyone can book a test drive.
pub async fn create(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<BookingCreate>,
) -> Result<Response, ApiError> {
    let booking = service::orders::create_booking(&state.store, payload).await?;
    Ok(created(booking, messages::BOOKING_CREATED))
}

pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Response, ApiError> {
    let rows = state.store.list_bookings().await?;
    Ok(success(rows, messages::SUCCESS))
}

pub async fn detail(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let booking = state
        .store
        .get_booking(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Booking"))?;
    Ok(success(booking, messages::SUCCESS))
}

pub async fn update_status(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
    ValidJson(payload): ValidJson<BookingStatusUpdate>,
) -> Result<Response, ApiError> {
    let booking = state
        .store
        .set_booking_status(id, payload.status)
        .await?
        .ok_or_else(|| ApiError::not_found("Booking"))?;
    Ok(success(booking, messages::BOOKING_UPDATED))
}
