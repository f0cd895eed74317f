//! Request extraction helpers that report failures as [`AppError`].

use axum::extract::{FromRequest, FromRequestParts};
use categories_core::types::DbId;

use crate::error::AppError;

/// `Json<T>` whose rejection is an [`AppError::BadRequest`] (400) instead of
/// axum's default 415 / 422 responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `Query<T>` whose rejection is an [`AppError::BadRequest`] (400) with the
/// usual JSON error body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Parse a category id from a path segment.
pub fn parse_id(raw: &str) -> Result<DbId, AppError> {
    DbId::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid UUID string: {raw}")))
}
