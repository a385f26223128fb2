//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic conversion into the JSON response envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("No token provided")]
    MissingToken,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Resource errors
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0} already exists")]
    Conflict(&'static str),

    // Validation
    #[error("Validation error")]
    Validation(Vec<FieldError>),

    // External service errors
    #[error("Internal server error")]
    Database(#[from] DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error envelope body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<Value>,
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingToken | AppError::InvalidToken | AppError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the `error` detail for the envelope (never internal details)
    fn detail(&self) -> Option<Value> {
        match self {
            AppError::MissingToken | AppError::InvalidToken => Some(json!("Unauthorized")),
            AppError::Validation(errors) => Some(json!(errors)),
            AppError::Database(e) => {
                tracing::error!(error = ?e, "Database error");
                None
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                None
            }
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            success: false,
            error: self.detail(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, resource: &'static str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, resource: &'static str) -> AppResult<T> {
        self.ok_or(AppError::NotFound(resource))
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation(vec![FieldError::new(field, message)])
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Map a write failure, turning unique-index violations into `Conflict`.
    pub fn from_write(err: DbErr, resource: &'static str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::warn!(resource, detail = %detail, "Unique constraint violated");
                AppError::Conflict(resource)
            }
            _ => AppError::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::MissingToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::InvalidToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::NotFound("Product").status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::Conflict("Category").status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::validation("rating", "too high").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(AppError::NotFound("Product").to_string(), "Product not found");
        assert_eq!(AppError::MissingToken.to_string(), "No token provided");
        assert_eq!(AppError::InvalidToken.to_string(), "Invalid or expired token");
        assert_eq!(AppError::validation("x", "y").to_string(), "Validation error");
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        let err = AppError::internal("connection refused at 10.0.0.5");
        assert!(err.detail().is_none());
        assert_eq!(err.to_string(), "Internal server error");

        let db = AppError::Database(DbErr::Custom("relation missing".into()));
        assert!(db.detail().is_none());
        assert_eq!(db.to_string(), "Internal server error");
    }

    #[test]
    fn test_non_unique_write_error_stays_database() {
        let err = AppError::from_write(DbErr::Custom("boom".into()), "Category");
        assert!(matches!(err, AppError::Database(_)));
    }
}
