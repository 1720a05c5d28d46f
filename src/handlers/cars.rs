use axum::extract::{Path, Query, State};
use axum::response::Response;

use crate::error::ApiError;
use crate::middleware::auth::{MaybeAdmin, RequireAdmin};
use crate::middleware::json::ValidJson;
use crate::response::{created, message_only, messages, success};
use crate::router::AppState;
use crate::service;
use crate::service::cars::FeatureParse;
use crate::service::related::RELATED_LIMIT;
use crate::types::cars::{CarDetailOut, CarFilterQuery, CarPatchPayload, CarPayload};

const FEATURED_COUNT: i64 = 6;

/// Inventory listing. Anonymous callers are pinned to active cars; asking
/// for inactive stock explicitly requires admin.
pub async fn list(
    State(state): State<AppState>,
    MaybeAdmin(admin): MaybeAdmin,
    Query(query): Query<CarFilterQuery>,
) -> Result<Response, ApiError> {
    let mut filter = query.into_filter();
    if admin.is_none() {
        if filter.is_active == Some(false) {
            return Err(ApiError::Forbidden(
                "Admin access is required to list inactive cars".to_string(),
            ));
        }
        filter.is_active = Some(true);
    }

    let cars = state.store.list_cars(&filter).await?;
    let items = service::cars::list_items(&state.store, cars).await?;
    Ok(success(items, messages::SUCCESS))
}

/// Latest six active cars, newest first.
pub async fn featured(State(state): State<AppState>) -> Result<Response, ApiError> {
    let cars = state.store.featured_cars(FEATURED_COUNT).await?;
    let items = service::cars::list_items(&state.store, cars).await?;
    Ok(success(items, messages::SUCCESS))
}

/// Detail plus the related-cars block.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let car = state
        .store
        .get_car(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Car"))?;

    let related = service::related::related_cars(&state.store, &car, RELATED_LIMIT).await?;
    let related_cars = service::cars::list_items(&state.store, related).await?;
    let car_out = service::cars::car_out(&state.store, car).await?;

    Ok(success(
        CarDetailOut {
            car: car_out,
            related_cars,
        },
        messages::SUCCESS,
    ))
}

pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ValidJson(payload): ValidJson<CarPayload>,
) -> Result<Response, ApiError> {
    if state
        .store
        .get_manufacturer(payload.manufacturer_id)
        .await?
        .is_none()
    {
        return Err(ApiError::Validation("Unknown manufacturer_id".to_string()));
    }

    let features =
        service::cars::parse_feature_names(payload.feature_names.as_ref(), FeatureParse::Strict)?
            .unwrap_or_default();

    let car_id = state
        .store
        .create_car(&payload.to_new_car(), &features, &payload.images)
        .await?;
    let car = state
        .store
        .get_car(car_id)
        .await?
        .ok_or_else(|| ApiError::Internal("car vanished after insert".to_string()))?;
    let out = service::cars::car_out(&state.store, car).await?;

    Ok(created(out, messages::CAR_CREATED))
}

pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
    ValidJson(payload): ValidJson<CarPatchPayload>,
) -> Result<Response, ApiError> {
    if let Some(manufacturer_id) = payload.manufacturer_id {
        if state.store.get_manufacturer(manufacturer_id).await?.is_none() {
            return Err(ApiError::Validation("Unknown manufacturer_id".to_string()));
        }
    }

    // Malformed feature payloads are dropped on update, not rejected.
    let features =
        service::cars::parse_feature_names(payload.feature_names.as_ref(), FeatureParse::Lenient)?;

    let updated = state
        .store
        .update_car(
            id,
            &payload.to_patch(),
            features.as_deref(),
            payload.images.as_deref(),
        )
        .await?
        .ok_or_else(|| ApiError::not_found("Car"))?;
    let out = service::cars::car_out(&state.store, updated).await?;

    Ok(success(out, messages::CAR_UPDATED))
}

pub async fn destroy(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    if !state.store.delete_car(id).await? {
        return Err(ApiError::not_found("Car"));
    }
    Ok(message_only(messages::CAR_DELETED))
}
