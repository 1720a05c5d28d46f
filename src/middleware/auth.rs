use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, request::Parts};

use crate::db::models::AdminUser;
use crate::error::ApiError;
use crate::router::AppState;

/// Pull the opaque token out of the Authorization header.
/// Accepts both `Bearer <token>` and `Token <token>` prefixes.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let auth = headers.get("authorization")?.to_str().ok()?.trim();
    auth.strip_prefix("Bearer ")
        .or_else(|| auth.strip_prefix("bearer "))
        .or_else(|| auth.strip_prefix("Token "))
        .or_else(|| auth.strip_prefix("token "))
        .map(str::trim)
}

/// Guard for admin-only routes: resolves the token against the database and
/// rejects with 401 when missing or unknown.
pub struct RequireAdmin(pub AdminUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or_else(|| {
            ApiError::Unauthorized("Authentication credentials were not provided".to_string())
        })?;
        let user = state
            .store
            .find_token_user(token)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Invalid token".to_string()))?;
        Ok(Self(user))
    }
}

/// Optional authentication for routes whose behavior widens for admins
/// (e.g. listing inactive cars). An absent or unknown token just means
/// anonymous; it never rejects.
pub struct MaybeAdmin(pub Option<AdminUser>);

impl FromRequestParts<AppState> for MaybeAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(&parts.headers) else {
            return Ok(Self(None));
        };
        let user = state.store.find_token_user(token).await?;
        Ok(Self(user))
    }
}
