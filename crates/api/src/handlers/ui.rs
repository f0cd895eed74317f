//! Handler for the HTML listing page.

use axum::extract::State;
use axum::response::Html;

use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::html::render_category_list;
use crate::query::NameFilterParams;
use crate::state::AppState;

/// GET /?name_filter=
pub async fn index(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<NameFilterParams>,
) -> AppResult<Html<String>> {
    let filter = params.name_filter.as_deref();
    let categories = match filter {
        Some(name) => state.categories.find_all_categories_having_name(name).await?,
        None => state.categories.find_all_categories().await?,
    };
    Ok(Html(render_category_list(&categories, filter)))
}
