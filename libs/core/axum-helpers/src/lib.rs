//! # Axum Helpers
//!
//! Shared HTTP plumbing for the catalog services.
//!
//! ## Modules
//!
//! - **[`server`]**: Router setup with docs and middleware, health checks, graceful shutdown
//! - **[`envelope`]**: Success and paginated response envelopes
//! - **[`errors`]**: `AppError` and the `{message, errors}` error envelope
//! - **[`extractors`]**: Numeric id path, validated JSON body, validated query string
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = ServerConfig::default();
//!     let router = create_router::<ApiDoc>(Router::new(), &config);
//!     create_app(router, &config).await
//! }
//! ```

pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod server;

pub use envelope::{LIST_SUCCESS, MessageResponse, PaginatedResponse, SuccessResponse};

pub use server::{
    API_BASE_PATH, HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_app,
    create_production_app, create_router, health_router, run_health_checks, shutdown_signal,
};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{IdPath, ValidatedJson, ValidatedQuery};
