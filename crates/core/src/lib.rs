//! Domain rules for the categories service.
//!
//! Nothing in here touches the database: the error type, identifier type,
//! category field limits and the formatting of validation failures.

pub mod category;
pub mod error;
pub mod types;
pub mod validation;
