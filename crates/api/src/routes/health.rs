use axum::extract::State;
use axum::{routing::get, Json, Router};
use categories_core::category::HELLO_MESSAGE;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` while the database is unreachable.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Same text as `GET /api/categories/hello`.
    pub ping: &'static str,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = categories_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        ping: HELLO_MESSAGE,
    })
}

/// `/health`, mounted beside the page rather than under `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
