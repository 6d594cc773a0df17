//! API routes, mounted under `/api/v1` by `create_router`.

pub mod brands;
pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/brands", brands::router(state))
        .nest("/products", products::router(state))
}

/// `/ready` sits next to `/health`, outside the versioned prefix.
pub fn ready_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
