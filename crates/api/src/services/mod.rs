//! Business services wrapping the repositories.

pub mod category;

pub use category::CategoryService;
