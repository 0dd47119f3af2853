//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::DomainError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Domain validation failures (blank/overlong fields, bad email or
    // phone format, non-positive ids, illegal phone conversion)
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Malformed input at the HTTP edge (bad JSON, failed DTO validation)
    #[error("Invalid input: {0}")]
    BadRequest(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    fn code(&self) -> &'static str {
        match self {
            AppError::Domain(e) => match e {
                DomainError::BlankField(_) => "BLANK_FIELD",
                DomainError::FieldTooLong { .. } => "FIELD_TOO_LONG",
                DomainError::InvalidEmail(_) => "INVALID_EMAIL_FORMAT",
                DomainError::InvalidPhone(_) => "INVALID_PHONE_FORMAT",
                DomainError::InvalidId => "INVALID_IDENTIFIER",
                DomainError::IllegalConversion(_) => "ILLEGAL_CONVERSION",
            },
            AppError::NotFound => "NOT_FOUND",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::Domain(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Domain(e) => e.to_string(),
            AppError::BadRequest(msg) => msg.clone(),

            // Hide details for internal errors
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_bad_request() {
        let err = AppError::from(DomainError::InvalidId);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "INVALID_IDENTIFIER");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let err = AppError::internal("connection pool exhausted");
        assert_eq!(err.user_message(), "An internal error occurred");
    }
}
