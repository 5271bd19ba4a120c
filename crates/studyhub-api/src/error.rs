//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use studyhub_core::error::{AppError, ErrorKind};

/// Result type for handler functions.
pub type ApiResult<T> = Result<T, ApiError>;

/// Newtype over `AppError` so the domain error can cross into Axum's
/// `IntoResponse` world.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = match err.kind {
            ErrorKind::Validation | ErrorKind::Duplicate => StatusCode::BAD_REQUEST,
            ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
            ErrorKind::Authorization => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Upstream
            | ErrorKind::Database
            | ErrorKind::Internal
            | ErrorKind::Configuration
            | ErrorKind::Serialization => {
                tracing::error!(kind = %err.kind, error = %err.message, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ApiErrorResponse {
            error: err.kind.to_string(),
            message: err.message,
        };

        (status, Json(body)).into_response()
    }
}
