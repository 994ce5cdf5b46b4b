//! Application state shared across request handlers.

use crate::db::AsyncDbPool;
use crate::services::Services;

/// Shared application state passed to every handler.
///
/// Cloning is cheap since the pool and services use `Arc` internally.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    pub db_pool: AsyncDbPool,
}

impl AppState {
    /// Creates application state from an established connection pool.
    pub fn new(db_pool: AsyncDbPool) -> Self {
        let repos = crate::repositories::Repositories::new(db_pool.clone());
        Self {
            services: Services::new(repos),
            db_pool,
        }
    }
}
