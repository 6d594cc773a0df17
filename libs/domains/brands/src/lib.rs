//! Brands Domain
//!
//! CRUD for product brands with soft delete and paginated listing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, envelopes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Pagination defaults, existence checks, mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + Postgres / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Brand, DTOs, sort keys
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_brands::{handlers, InMemoryBrandRepository, BrandService};
//!
//! let service = BrandService::new(InMemoryBrandRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{BrandError, BrandResult};
pub use models::{
    Brand, BrandListQuery, BrandResponse, BrandSortField, CreateBrand, UpdateBrand,
    format_timestamp,
};
pub use postgres::PgBrandRepository;
pub use repository::{BrandRepository, InMemoryBrandRepository};
pub use service::{BrandPage, BrandService};

#[cfg(any(test, feature = "mock"))]
pub use repository::MockBrandRepository;
