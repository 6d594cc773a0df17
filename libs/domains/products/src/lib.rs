//! Products Domain
//!
//! CRUD for products. Every product belongs to a brand, and every product
//! result embeds that brand.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, envelopes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Pagination, brand checks, brand enrichment
//! └──┬───────┬──┘
//!    │       │
//! ┌──▼───┐ ┌─▼────────────────┐
//! │ Repo │ │ BrandRepository  │  ← from domain_brands
//! └──────┘ └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_brands::InMemoryBrandRepository;
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let service = ProductService::new(
//!     InMemoryProductRepository::new(),
//!     InMemoryBrandRepository::new(),
//! );
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use models::{
    CreateProduct, Product, ProductListQuery, ProductResponse, ProductSortField, UpdateProduct,
};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::{ProductPage, ProductService};

#[cfg(any(test, feature = "mock"))]
pub use repository::MockProductRepository;
