//! Handlers for the `/api/categories` resource.

use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use categories_core::category::{ENTITY, HELLO_MESSAGE};
use categories_core::error::CoreError;
use categories_db::models::category::{Category, CreateCategory, PatchCategory};

use crate::error::{AppError, AppResult};
use crate::extract::{parse_id, AppJson, AppQuery};
use crate::query::NameFilterParams;
use crate::state::AppState;

/// Base path used to build `Location` headers.
const BASE_PATH: &str = "/api/categories";

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /api/categories?name_filter=
///
/// All categories, or only those whose name contains `name_filter`
/// (case-insensitive) when it is given.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<NameFilterParams>,
) -> AppResult<Json<Vec<Category>>> {
    let categories = match params.name_filter.as_deref() {
        Some(name) => state.categories.find_all_categories_having_name(name).await?,
        None => state.categories.find_all_categories().await?,
    };
    tracing::debug!(count = categories.len(), "Total number of categories");
    Ok(Json(categories))
}

/// GET /api/categories/random
pub async fn get_random(State(state): State<AppState>) -> AppResult<Json<Category>> {
    let category = state
        .categories
        .find_random_category()
        .await?
        .ok_or(AppError::Core(CoreError::NoneFound { entity: ENTITY }))?;
    tracing::debug!(?category, "Found random category");
    Ok(Json(category))
}

/// GET /api/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Category>> {
    let id = parse_id(&id)?;
    let category = state
        .categories
        .find_category_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(category))
}

/// GET /api/categories/hello
pub async fn hello() -> &'static str {
    tracing::debug!("{HELLO_MESSAGE}");
    HELLO_MESSAGE
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// POST /api/categories
///
/// Responds 201 with a `Location` header pointing at the new category.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let category = state.categories.persist_category(input).await?;
    let location = format!("{BASE_PATH}/{}", category.id);
    tracing::debug!(%location, "New category created");
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(category)))
}

/// PUT /api/categories
///
/// Replace every category with the request body's list.
pub async fn replace_all(
    State(state): State<AppState>,
    AppJson(inputs): AppJson<Vec<CreateCategory>>,
) -> AppResult<impl IntoResponse> {
    let created = state.categories.replace_all_categories(inputs).await?;
    tracing::debug!(count = created.len(), "Replaced all categories");
    Ok((StatusCode::CREATED, [(LOCATION, BASE_PATH)]))
}

/// PUT /api/categories/{id}
///
/// Full replacement. Responds 204, or 404 without creating anything.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<CreateCategory>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    let category = state
        .categories
        .replace_category(id, input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    tracing::debug!(?category, "Category replaced with new values");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/categories/{id}
///
/// Merge only the supplied fields and return the updated category.
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(patch): AppJson<PatchCategory>,
) -> AppResult<Json<Category>> {
    let id = parse_id(&id)?;
    let category = state
        .categories
        .partial_update_category(id, patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(category))
}

/// DELETE /api/categories
pub async fn delete_all(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.categories.delete_all_categories().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/categories/{id}
///
/// Responds 204 whether or not the category existed.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    state.categories.delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
