use axum::Router;
use domain_brands::{BrandService, PgBrandRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = PgBrandRepository::new(state.db.clone());
    handlers::router(BrandService::new(repository))
}
