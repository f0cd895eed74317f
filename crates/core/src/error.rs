use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A lookup that is not keyed by id (e.g. a random pick) found no rows.
    #[error("No {entity} found")]
    NoneFound { entity: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),
}
