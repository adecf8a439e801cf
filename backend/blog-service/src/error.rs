/// Error types for the blog service
///
/// This module defines all error types that can occur in the service.
/// Errors are converted to appropriate HTTP responses for API clients:
/// `{timestamp, message, details}` for resource/relationship failures and a
/// bare `{field: message}` map for validation failures.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use chrono::Utc;
use std::collections::BTreeMap;
use thiserror::Error;

/// Result type for blog-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// A referenced entity does not exist
    #[error("{resource} not found with {field} : '{value}'")]
    NotFound {
        resource: &'static str,
        field: &'static str,
        value: i64,
    },

    /// Relationship mismatch or otherwise malformed request
    #[error("{0}")]
    BadRequest(String),

    /// Field-level constraint violations on an incoming DTO
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(BTreeMap<&'static str, String>),

    /// Request conflicts with existing state
    #[error("{0}")]
    Conflict(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(resource: &'static str, field: &'static str, value: i64) -> Self {
        AppError::NotFound {
            resource,
            field,
            value,
        }
    }

    fn details(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "resource not found",
            AppError::BadRequest(_) => "bad request",
            AppError::Validation(_) => "validation failure",
            AppError::Conflict(_) => "conflict",
            AppError::Database(_) | AppError::Internal(_) => "internal server error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        // Validation failures use a distinct shape: one entry per violated field.
        if let AppError::Validation(errors) = self {
            return HttpResponse::build(status).json(errors);
        }

        // 500s must not leak driver or internal details to clients.
        let message = match self {
            AppError::Database(_) | AppError::Internal(_) => {
                "An unexpected error occurred".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(status).json(serde_json::json!({
            "timestamp": Utc::now(),
            "message": message,
            "details": self.details(),
        }))
    }
}
