//! Category field limits and fixed strings shared by the db and api crates.
//!
//! Lengths are `u64` because that is what `#[validate(length(...))]` compares
//! against.

/// Entity label used in not-found errors.
pub const ENTITY: &str = "Category";

/// Name length bounds, inclusive, counted in characters.
pub const NAME_MIN_LEN: u64 = 3;
pub const NAME_MAX_LEN: u64 = 50;

pub const DESCRIPTION_MAX_LEN: u64 = 300;

/// Body of the plain-text ping endpoint and the liveness probe.
pub const HELLO_MESSAGE: &str = "Hello Category Resource";
