use crate::services::CategoryService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable: the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: categories_db::DbPool,
    /// Category business operations, sharing `pool`.
    pub categories: CategoryService,
}

impl AppState {
    pub fn new(pool: categories_db::DbPool) -> Self {
        Self {
            categories: CategoryService::new(pool.clone()),
            pool,
        }
    }
}
