use axum::extract::State;
use axum::response::Response;

use crate::error::ApiError;
use crate::middleware::auth::RequireAdmin;
use crate::middleware::json::ValidJson;
use crate::response::{messages, success};
use crate::router::AppState;
use crate::service;
use crate::types::settings::{SettingsOut, SettingsPatch};

pub async fn detail(State(state): State<AppState>) -> Result<Response, ApiError> {
    let settings = service::settings::get_settings(&state.store).await?;
    Ok(success(SettingsOut::from(settings), messages::SUCCESS))
}

pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ValidJson(patch): ValidJson<SettingsPatch>,
) -> Result<Response, ApiError> {
    let settings = service::settings::update_settings(&state.store, patch).await?;
    Ok(success(SettingsOut::from(settings), messages::UPDATED))
}
