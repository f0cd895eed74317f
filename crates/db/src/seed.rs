//! Starter catalogue loaded into an empty `categories` table.

use crate::models::category::{Category, CreateCategory};
use crate::repositories::CategoryRepo;
use crate::DbPool;

/// `(name, description)` pairs inserted by [`seed_initial_categories`].
pub const INITIAL_CATEGORIES: [(&str, &str); 16] = [
    ("Vehicles", "Vehicles"),
    ("Electronics", "Electronics"),
    ("Books", "Books"),
    ("Clothing", "Clothing"),
    ("Furniture", "Furniture"),
    ("Toys", "Toys"),
    ("Sports", "Sports"),
    ("Garden", "Garden"),
    ("Kitchen", "Kitchen"),
    ("Music", "Music"),
    ("Movies", "Movies"),
    ("Jewelry", "Jewelry"),
    ("Beauty", "Beauty"),
    ("Health", "Health"),
    ("Groceries", "Groceries"),
    ("Pet Supplies", "Pet Supplies"),
];

/// Insert [`INITIAL_CATEGORIES`] when the table holds no rows.
///
/// Returns the inserted rows; a table that already has data is left alone and
/// yields an empty list.
pub async fn seed_initial_categories(pool: &DbPool) -> Result<Vec<Category>, sqlx::Error> {
    if CategoryRepo::count(pool).await? > 0 {
        tracing::debug!("Categories already present, skipping seed");
        return Ok(Vec::new());
    }

    let inputs: Vec<CreateCategory> = INITIAL_CATEGORIES
        .iter()
        .map(|(name, description)| CreateCategory {
            name: Some((*name).to_string()),
            description: Some((*description).to_string()),
        })
        .collect();
    let created = CategoryRepo::create_many(pool, &inputs).await?;
    tracing::info!(count = created.len(), "Seeded initial categories");
    Ok(created)
}
