//! Success envelopes shared by every endpoint.
//!
//! - [`SuccessResponse`]: `{message, data}`
//! - [`MessageResponse`]: `{message, data: null}` for writes
//! - [`PaginatedResponse`]: `{message, total_page, items_per_page, current_page, total_items, data}`
//!
//! Failures use [`crate::errors::ErrorResponse`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message used for every paginated listing.
pub const LIST_SUCCESS: &str = "success";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> SuccessResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for SuccessResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Success envelope for writes; `data` is always `null`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }

    /// Same envelope answered with `201 Created`.
    pub fn created(message: impl Into<String>) -> (StatusCode, Json<Self>) {
        (StatusCode::CREATED, Json(Self::new(message)))
    }
}

impl IntoResponse for MessageResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub message: String,
    pub total_page: u64,
    pub items_per_page: u64,
    pub current_page: u64,
    pub total_items: u64,
    pub data: Vec<T>,
}

impl<T: Serialize> IntoResponse for PaginatedResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
