//! Category entity model and DTOs.

use categories_core::category::{DESCRIPTION_MAX_LEN, NAME_MAX_LEN, NAME_MIN_LEN};
use categories_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `categories` table.
///
/// Also validated after a partial update has been merged into it.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Validate)]
pub struct Category {
    pub id: DbId,
    #[validate(length(
        min = NAME_MIN_LEN,
        max = NAME_MAX_LEN,
        message = "size must be between 3 and 50"
    ))]
    pub name: String,
    #[validate(length(max = DESCRIPTION_MAX_LEN, message = "size must be between 0 and 300"))]
    pub description: Option<String>,
}

/// DTO for creating a category or fully replacing one.
///
/// Any `id` in the request body is ignored: ids come from the database on
/// insert and from the path on replacement.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(
        required(message = "must not be null"),
        length(min = NAME_MIN_LEN, max = NAME_MAX_LEN, message = "size must be between 3 and 50")
    )]
    pub name: Option<String>,
    #[validate(length(max = DESCRIPTION_MAX_LEN, message = "size must be between 0 and 300"))]
    pub description: Option<String>,
}

/// DTO for a partial update. `None` (absent or `null`) leaves the field as is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchCategory {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Category {
    /// Overwrite every field except `id` with the values from `input`.
    ///
    /// A missing description clears the stored one.
    pub fn apply_full(&mut self, input: CreateCategory) {
        self.name = input.name.unwrap_or_default();
        self.description = input.description;
    }

    /// Overwrite only the fields that `patch` supplies.
    pub fn apply_patch(&mut self, patch: PatchCategory) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
    }
}
