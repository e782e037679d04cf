use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use hipis_core::envelope::Envelope;

/// Unified API error type for all route handlers. Every variant renders as
/// the standard envelope with `success: false`.
#[derive(Debug)]
pub enum ApiError {
    Unauthenticated(String),
    Forbidden(String),
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    /// Denial for an id-addressed record: the same 404 whether the record is
    /// missing or belongs to someone else, so ids cannot be enumerated.
    pub fn not_found() -> Self {
        ApiError::NotFound("Not found".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthenticated(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong. Please try again.".to_string(),
                )
            }
        };

        (status, Json(Envelope::failure(message))).into_response()
    }
}

impl From<hipis_storage::error::StorageError> for ApiError {
    fn from(e: hipis_storage::error::StorageError) -> Self {
        match e {
            hipis_storage::error::StorageError::NotFound { .. } => ApiError::not_found(),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<hipis_auth::error::AuthError> for ApiError {
    fn from(e: hipis_auth::error::AuthError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<hipis_core::error::CoreError> for ApiError {
    fn from(e: hipis_core::error::CoreError) -> Self {
        match e {
            hipis_core::error::CoreError::InvalidTransition(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
