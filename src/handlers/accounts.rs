use axum::extract::State;
use axum::response::Response;

use crate::error::ApiError;
use crate::middleware::auth::RequireAdmin;
use crate::middleware::json::ValidJson;
use crate::response::{created, message_only, messages, success};
use crate::router::AppState;
use crate::service;
use crate::types::accounts::{AuthUserOut, LoginPayload, RegisterPayload};

pub async fn register(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<RegisterPayload>,
) -> Result<Response, ApiError> {
    let result = service::auth::register(&state.store, &payload).await?;
    Ok(created(result, messages::REGISTER_SUCCESS))
}

pub async fn login(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<LoginPayload>,
) -> Result<Response, ApiError> {
    let result = service::auth::login(&state.store, &payload.email, &payload.password).await?;
    Ok(success(result, messages::LOGIN_SUCCESS))
}

/// Revokes every outstanding token for the caller.
pub async fn logout(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> Result<Response, ApiError> {
    state.store.delete_user_tokens(admin.id).await?;
    Ok(message_only(messages::LOGOUT_SUCCESS))
}

pub async fn profile(RequireAdmin(admin): RequireAdmin) -> Result<Response, ApiError> {
    Ok(success(AuthUserOut::from(&admin), messages::SUCCESS))
}
