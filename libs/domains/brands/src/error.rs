use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrandError {
    #[error("Brand not found: {0}")]
    NotFound(i64),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type BrandResult<T> = Result<T, BrandError>;

/// Convert BrandError to AppError for standardized error responses
impl From<BrandError> for AppError {
    fn from(err: BrandError) -> Self {
        match err {
            BrandError::NotFound(id) => AppError::NotFound(format!("Brand {} not found", id)),
            BrandError::Validation(msg) => AppError::BadRequest(msg),
            BrandError::Database(e) => AppError::Database(e),
            BrandError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for BrandError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
