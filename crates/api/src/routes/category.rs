//! Route definitions for the `/api/categories` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Routes mounted at `/api/categories`.
///
/// ```text
/// GET    /          -> list (?name_filter=)
/// POST   /          -> create
/// PUT    /          -> replace_all
/// DELETE /          -> delete_all
/// GET    /random    -> get_random
/// GET    /hello     -> hello
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> replace
/// PATCH  /{id}      -> partial_update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(category::list)
                .post(category::create)
                .put(category::replace_all)
                .delete(category::delete_all),
        )
        .route("/random", get(category::get_random))
        .route("/hello", get(category::hello))
        .route(
            "/{id}",
            get(category::get_by_id)
                .put(category::replace)
                .patch(category::partial_update)
                .delete(category::delete),
        )
}
