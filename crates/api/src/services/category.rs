//! Category business operations.
//!
//! Sits between the handlers and [`CategoryRepo`]: runs validation before
//! anything is written and applies the full / partial update merge rules.
//! Every operation runs inside a `CategoryService.<operation>` span.

use categories_core::error::CoreError;
use categories_core::types::DbId;
use categories_core::validation::describe;
use categories_db::models::category::{Category, CreateCategory, PatchCategory};
use categories_db::repositories::CategoryRepo;
use categories_db::DbPool;
use tracing::instrument;
use validator::Validate;

use crate::error::AppResult;

#[derive(Clone)]
pub struct CategoryService {
    pool: DbPool,
}

impl CategoryService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    #[instrument(name = "CategoryService.find_all_categories", skip(self))]
    pub async fn find_all_categories(&self) -> AppResult<Vec<Category>> {
        tracing::debug!("Getting all categories");
        Ok(CategoryRepo::list(&self.pool).await?)
    }

    #[instrument(name = "CategoryService.find_all_categories_having_name", skip(self))]
    pub async fn find_all_categories_having_name(&self, name: &str) -> AppResult<Vec<Category>> {
        tracing::debug!("Finding all categories having name");
        Ok(CategoryRepo::list_where_name_like(&self.pool, name).await?)
    }

    #[instrument(name = "CategoryService.find_category_by_id", skip(self))]
    pub async fn find_category_by_id(&self, id: DbId) -> AppResult<Option<Category>> {
        tracing::debug!("Finding category by id");
        Ok(CategoryRepo::find_by_id(&self.pool, id).await?)
    }

    #[instrument(name = "CategoryService.find_random_category", skip(self))]
    pub async fn find_random_category(&self) -> AppResult<Option<Category>> {
        tracing::debug!("Finding a random category");
        Ok(CategoryRepo::find_random(&self.pool).await?)
    }

    /// Validate and insert a new category.
    #[instrument(name = "CategoryService.persist_category", skip(self))]
    pub async fn persist_category(&self, input: CreateCategory) -> AppResult<Category> {
        tracing::debug!("Persisting category");
        input.validate().map_err(CoreError::from)?;
        Ok(CategoryRepo::create(&self.pool, &input).await?)
    }

    /// Overwrite every field except the id of an existing category.
    ///
    /// Returns `Ok(None)` when `id` does not exist; nothing is created.
    #[instrument(name = "CategoryService.replace_category", skip(self))]
    pub async fn replace_category(
        &self,
        id: DbId,
        input: CreateCategory,
    ) -> AppResult<Option<Category>> {
        tracing::debug!("Replacing category");
        input.validate().map_err(CoreError::from)?;

        let Some(mut category) = CategoryRepo::find_by_id(&self.pool, id).await? else {
            return Ok(None);
        };
        category.apply_full(input);
        Ok(CategoryRepo::update(&self.pool, &category).await?)
    }

    /// Merge the supplied fields into an existing category, then validate the
    /// merged record before writing it.
    ///
    /// Returns `Ok(None)` when `id` does not exist.
    #[instrument(name = "CategoryService.partial_update_category", skip(self))]
    pub async fn partial_update_category(
        &self,
        id: DbId,
        patch: PatchCategory,
    ) -> AppResult<Option<Category>> {
        tracing::info!("Partially updating category");

        let Some(mut category) = CategoryRepo::find_by_id(&self.pool, id).await? else {
            return Ok(None);
        };
        category.apply_patch(patch);
        category.validate().map_err(CoreError::from)?;
        Ok(CategoryRepo::update(&self.pool, &category).await?)
    }

    /// Delete every category, then bulk-insert `inputs`.
    ///
    /// All inputs are validated before anything is deleted. The delete and the
    /// insert are separate operations: if the insert fails the table is left
    /// empty.
    #[instrument(
        name = "CategoryService.replace_all_categories",
        skip(self, inputs),
        fields(count = inputs.len())
    )]
    pub async fn replace_all_categories(
        &self,
        inputs: Vec<CreateCategory>,
    ) -> AppResult<Vec<Category>> {
        tracing::debug!("Replacing all categories");
        for (index, input) in inputs.iter().enumerate() {
            input.validate().map_err(|errors| {
                CoreError::Validation(format!("[{index}] {}", describe(&errors)))
            })?;
        }

        self.delete_all_categories().await?;
        Ok(CategoryRepo::create_many(&self.pool, &inputs).await?)
    }

    #[instrument(name = "CategoryService.delete_all_categories", skip(self))]
    pub async fn delete_all_categories(&self) -> AppResult<u64> {
        tracing::debug!("Deleting all categories");
        Ok(CategoryRepo::delete_all(&self.pool).await?)
    }

    /// Delete one category. A missing id is not an error.
    #[instrument(name = "CategoryService.delete_category", skip(self))]
    pub async fn delete_category(&self, id: DbId) -> AppResult<()> {
        tracing::debug!("Deleting category by id");
        CategoryRepo::delete(&self.pool, id).await?;
        Ok(())
    }
}
