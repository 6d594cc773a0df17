use axum::Router;
use domain_brands::PgBrandRepository;
use domain_products::{PgProductRepository, ProductService, handlers};

use crate::state::AppState;

/// Product routes read brands through their own repository handle.
pub fn router(state: &AppState) -> Router {
    let service = ProductService::new(
        PgProductRepository::new(state.db.clone()),
        PgBrandRepository::new(state.db.clone()),
    );
    handlers::router(service)
}
