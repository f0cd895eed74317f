//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts and full replacement
//! - A `Deserialize` patch DTO (all `Option` fields) for partial updates

pub mod category;
