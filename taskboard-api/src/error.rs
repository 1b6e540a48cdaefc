/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// All handlers return `Result<T, ApiError>`, which converts to the
/// appropriate status code and JSON body; validation and precondition
/// failures abort the handler at the first failing check via `?`.
///
/// # Example
///
/// ```
/// use taskboard_api::error::{ApiError, ApiResult};
///
/// fn check_id(id: &str) -> ApiResult<()> {
///     if id.chars().count() < 4 {
///         return Err(ApiError::BadRequest(
///             "'id' must be at least 4 characters long".to_string(),
///         ));
///     }
///     Ok(())
/// }
/// ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Field-level type/length/prefix violation (400)
    #[error("{0}")]
    BadRequest(String),

    /// Referenced id absent (404)
    #[error("{0}")]
    NotFound(String),

    /// Duplicate id or email
    ///
    /// Answers 400, not 409; existing clients expect it.
    #[error("{0}")]
    Conflict(String),

    /// Store or runtime failure (500)
    #[error("unexpected error: {0}")]
    Internal(String),
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code (e.g., "bad_request", "not_found")
    pub error: String,

    /// Human-readable error message
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Conflict(msg) => (StatusCode::BAD_REQUEST, "conflict", msg),
            ApiError::Internal(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Unexpected error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_code.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Convert sqlx errors to API errors
///
/// Unique-constraint violations become Conflict: two concurrent creates
/// with the same id can both pass the existence check, and the loser
/// trips the constraint here instead.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("'id' not found".to_string()),
            sqlx::Error::Database(db_err) => {
                if let Some(constraint) = db_err.constraint() {
                    if constraint.contains("email") {
                        return ApiError::Conflict("'email' already exists".to_string());
                    }
                    return ApiError::Conflict("'id' already exists".to_string());
                }

                ApiError::Internal(format!("database error: {}", db_err))
            }
            _ => ApiError::Internal(format!("database error: {}", err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::BadRequest("'id' must be a string".to_string());
        assert_eq!(err.to_string(), "'id' must be a string");

        let err = ApiError::NotFound("'id' not found".to_string());
        assert_eq!(err.to_string(), "'id' not found");
    }

    #[test]
    fn test_conflict_maps_to_400() {
        let response = ApiError::Conflict("'email' already exists".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = ApiError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError::NotFound("'id' not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
