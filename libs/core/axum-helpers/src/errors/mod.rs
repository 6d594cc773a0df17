pub mod codes;
pub mod handlers;
pub mod responses;
pub mod validation;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Error envelope returned by every failing endpoint.
///
/// ```json
/// {
///   "message": "Request validation failed",
///   "errors": { "name": "Name must be between 1 and 255 characters" }
/// }
/// ```
///
/// `errors` is a `field -> message` map for validation failures and `null` otherwise.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
    /// Field-level validation messages, when the request failed validation
    #[schema(value_type = Option<Object>)]
    pub errors: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(message: impl Into<String>, errors: serde_json::Value) -> Self {
        Self {
            message: message.into(),
            errors: Some(errors),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Server-side failures are logged in full and answered with a generic
/// message; client errors echo their message back.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Unprocessable Entity: {0}")]
    UnprocessableEntity(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database(DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated) => {
                StatusCode::NOT_FOUND
            }
            AppError::Database(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::JsonExtractorRejection(_)
            | AppError::QueryExtractorRejection(_)
            | AppError::ValidationError(_)
            | AppError::InvalidId(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Database(DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated) => {
                ErrorCode::DatabaseNotFound
            }
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::JsonExtractorRejection(_) => ErrorCode::InvalidJson,
            AppError::QueryExtractorRejection(_) => ErrorCode::InvalidQuery,
            AppError::ValidationError(_) => ErrorCode::ValidationError,
            AppError::InvalidId(_) => ErrorCode::InvalidId,
            AppError::BadRequest(_) => ErrorCode::ValidationError,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::UnprocessableEntity(_) => ErrorCode::UnprocessableEntity,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let body = match self {
            AppError::Database(e) => {
                if status == StatusCode::NOT_FOUND {
                    tracing::info!(error_code = code.code(), "Database record not found: {}", e);
                } else {
                    tracing::error!(error_code = code.code(), "Database error: {:?}", e);
                }
                ErrorResponse::new(code.default_message())
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(error_code = code.code(), "JSON extraction error: {:?}", e);
                ErrorResponse::new(e.body_text())
            }
            AppError::QueryExtractorRejection(e) => {
                tracing::warn!(error_code = code.code(), "Query extraction error: {:?}", e);
                ErrorResponse::new(e.body_text())
            }
            AppError::ValidationError(e) => {
                tracing::info!(error_code = code.code(), "Validation error: {}", e);
                let fields = validation::field_errors(&e);
                ErrorResponse::with_errors(
                    code.default_message(),
                    serde_json::to_value(fields).unwrap_or(serde_json::Value::Null),
                )
            }
            AppError::InvalidId(raw) => {
                tracing::info!(error_code = code.code(), "Invalid id: {}", raw);
                ErrorResponse::new(format!("Invalid id: {}", raw))
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(error_code = code.code(), "Internal server error: {}", msg);
                ErrorResponse::new(code.default_message())
            }
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::UnprocessableEntity(msg) => {
                tracing::info!(error_code = code.code(), "{}: {}", code, msg);
                ErrorResponse::new(msg)
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Builds an error envelope response without going through [`AppError`].
pub fn error_response(status: StatusCode, error_code: ErrorCode) -> Response {
    (status, Json(ErrorResponse::new(error_code.default_message()))).into_response()
}
