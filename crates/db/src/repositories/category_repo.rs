//! Repository for the `categories` table.

use categories_core::types::DbId;
use rand::Rng;
use sqlx::PgPool;

use crate::models::category::{Category, CreateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List every category ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name, id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// List categories whose name contains `name`, ignoring case.
    ///
    /// The filter is matched literally, so `%` and `_` carry no wildcard meaning.
    pub async fn list_where_name_like(
        pool: &PgPool,
        name: &str,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories
             WHERE strpos(LOWER(name), LOWER($1)) > 0
             ORDER BY name, id"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_all(pool)
            .await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count all categories.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(pool)
            .await
    }

    /// Pick one category uniformly at random.
    ///
    /// Draws an index in `[0, count)` and reads the row at that offset.
    /// Returns `None` when the table is empty.
    pub async fn find_random(pool: &PgPool) -> Result<Option<Category>, sqlx::Error> {
        let count = Self::count(pool).await?;
        if count == 0 {
            return Ok(None);
        }

        let offset = rand::rng().random_range(0..count);
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id LIMIT 1 OFFSET $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(offset)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new category, returning the created row with its generated ID.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Batch-insert categories in one statement, returning the created rows.
    pub async fn create_many(
        pool: &PgPool,
        inputs: &[CreateCategory],
    ) -> Result<Vec<Category>, sqlx::Error> {
        if inputs.is_empty() {
            return Ok(vec![]);
        }

        let names: Vec<Option<String>> = inputs.iter().map(|c| c.name.clone()).collect();
        let descriptions: Vec<Option<String>> =
            inputs.iter().map(|c| c.description.clone()).collect();

        let query = format!(
            "INSERT INTO categories (name, description) \
             SELECT * FROM UNNEST($1::text[], $2::text[]) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&names)
            .bind(&descriptions)
            .fetch_all(pool)
            .await
    }

    /// Write every non-ID field of `category` to its row.
    ///
    /// Returns `None` if no row with `category.id` exists.
    pub async fn update(
        pool: &PgPool,
        category: &Category,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
                name = $2,
                description = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(category.id)
            .bind(&category.name)
            .bind(&category.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every category one row at a time. Returns the number removed.
    ///
    /// Not wrapped in a transaction: a failure part way leaves the rows that
    /// were not reached yet in place.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let categories = Self::list(pool).await?;
        let mut removed = 0;
        for category in &categories {
            if Self::delete(pool, category.id).await? {
                removed += 1;
            }
        }
        tracing::debug!(removed, "Deleted all categories");
        Ok(removed)
    }
}
