use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_brands::BrandError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i64),

    /// The brand named in a create/update payload is absent or deleted.
    #[error("Brand {0} does not exist")]
    BrandNotFound(i64),

    /// A stored product points at a brand row that is gone.
    #[error("Product {product_id} references missing brand {brand_id}")]
    MissingBrand { product_id: i64, brand_id: i64 },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<BrandError> for ProductError {
    fn from(err: BrandError) -> Self {
        match err {
            BrandError::NotFound(id) => ProductError::BrandNotFound(id),
            BrandError::Validation(msg) => ProductError::Validation(msg),
            BrandError::Database(e) => ProductError::Database(e),
            BrandError::Internal(msg) => ProductError::Internal(msg),
        }
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::BrandNotFound(id) => {
                AppError::UnprocessableEntity(format!("Brand {} does not exist", id))
            }
            err @ ProductError::MissingBrand { .. } => AppError::InternalServerError(err.to_string()),
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::Database(e) => AppError::Database(e),
            ProductError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
