use axum::routing::get;
use axum::Router;

use crate::handlers::ui;
use crate::state::AppState;

/// The HTML listing page, mounted at the root.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(ui::index))
}
