use axum::extract::{Query, State};
use axum::response::Response;
use chrono::Utc;

use crate::error::ApiError;
use crate::middleware::auth::RequireAdmin;
use crate::middleware::json::ValidJson;
use crate::response::{created, messages, success};
use crate::router::AppState;
use crate::types::settings::{RecentlySoldCreate, SoldListQuery, SoldTransition};

const DEFAULT_LIMIT: i64 = 10;

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<SoldListQuery>,
) -> Result<Response, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).max(0);
    let rows = state.store.list_recently_sold(limit).await?;
    Ok(success(rows, messages::SUCCESS))
}

/// Insert a sold record directly (admin), e.g. for sales made off-system.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ValidJson(payload): ValidJson<RecentlySoldCreate>,
) -> Result<Response, ApiError> {
    let row = state
        .store
        .insert_recently_sold(
            &payload.car_name,
            &payload.price,
            payload.sold_date,
            &payload.image,
        )
        .await?;
    Ok(created(row, messages::SOLD_CREATED))
}

/// Move an inventory car into the sold history: snapshot then deactivate.
pub async fn add_car(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ValidJson(payload): ValidJson<SoldTransition>,
) -> Result<Response, ApiError> {
    let sold_date = payload
        .sold_date
        .unwrap_or_else(|| Utc::now().date_naive());
    let row = state.store.mark_car_sold(payload.car_id, sold_date).await?;
    Ok(created(row, messages::SOLD_TRANSITION))
}
