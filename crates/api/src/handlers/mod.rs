//! Request handlers.
//!
//! Handlers delegate to [`crate::services::CategoryService`] and map errors
//! via [`crate::error::AppError`].

pub mod category;
pub mod ui;
