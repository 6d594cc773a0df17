//! Shared application state.

use database::postgres::DatabaseConnection;

/// Handed to the route builders and the readiness probe.
///
/// `DatabaseConnection` is a pool handle, so cloning the state is cheap.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: DatabaseConnection,
}
