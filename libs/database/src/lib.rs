//! Database library providing the PostgreSQL connector and shared persistence utilities.
//!
//! # Features
//!
//! - `postgres` (default) - PostgreSQL support with SeaORM, plus pagination helpers
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config_with_retry(PostgresConfig::from_env()?, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "catalog_api").await?;
//! ```

// Always available modules
pub mod common;

#[cfg(feature = "postgres")]
pub mod pagination;

#[cfg(feature = "postgres")]
pub mod postgres;

// Re-exports for convenience
pub use common::{DatabaseError, DatabaseResult};

#[cfg(feature = "postgres")]
pub use pagination::{MAX_PAGE, MAX_PER_PAGE, PageRequest, SortDirection, total_pages};
