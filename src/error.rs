use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use serde_json::Value;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

/// Unified request-path error. Every handler returns `Result<_, ApiError>`
/// and the `IntoResponse` impl below maps each variant onto the standard
/// error envelope, so nothing escapes to the client uncaught.
#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn not_found(what: &str) -> Self {
        ApiError::NotFound(format!("{what} not found"))
    }

    /// Turns a unique-constraint violation into a `Conflict` with the given
    /// message; every other database error passes through unchanged.
    pub fn on_unique(err: SqlxError, message: &str) -> Self {
        match &err {
            SqlxError::Database(db) if db.is_unique_violation() => {
                ApiError::Conflict(message.to_string())
            }
            _ => ApiError::Database(err),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();

        let message = match &self {
            ApiError::Database(e) => {
                tracing::error!(error = %e, "database error");
                "Internal server error".to_string()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorEnvelope {
            success: false,
            message,
            errors: None,
            status_code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

/// Standardized API error response body.
#[derive(Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
    pub status_code: u16,
}
