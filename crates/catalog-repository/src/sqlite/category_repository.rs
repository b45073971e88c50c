//! SQLite category repository implementation.

use super::parse_id;
use crate::{traits::CategoryRepository, DatabasePoolInterface};
use async_trait::async_trait;
use catalog_core::{search_key, CatalogError, CatalogResult, CategoryId, Repository};
use catalog_domain::Category;
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// SQLite category repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = CategoryRepository)]
pub struct SqliteCategoryRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl SqliteCategoryRepository {
    /// Creates a new SQLite category repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    category_id: String,
    display_name: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = CatalogError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category::restore(
            parse_id("CategoryId", &row.category_id)?,
            row.display_name,
        ))
    }
}

#[async_trait]
impl Repository<Category> for SqliteCategoryRepository {
    async fn find_by_id(&self, id: CategoryId) -> CatalogResult<Option<Category>> {
        debug!("Finding category by id: {}", id);

        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT CategoryId AS category_id, DisplayName AS display_name
            FROM Category
            WHERE CategoryId = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Category::try_from).transpose()
    }

    async fn exists(&self, id: CategoryId) -> CatalogResult<bool> {
        let result: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM Category WHERE CategoryId = ? LIMIT 1")
                .bind(id.to_string())
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(result.is_some())
    }

    async fn add(&self, category: &Category) -> CatalogResult<()> {
        debug!("Adding category: {}", category.category_id());

        sqlx::query("INSERT INTO Category (CategoryId, DisplayName, SearchName) VALUES (?, ?, ?)")
            .bind(category.category_id().to_string())
            .bind(category.display_name())
            .bind(search_key(category.display_name()))
            .execute(self.pool.inner())
            .await?;

        Ok(())
    }

    async fn update(&self, category: &Category) -> CatalogResult<()> {
        debug!("Updating category: {}", category.category_id());

        let result =
            sqlx::query("UPDATE Category SET DisplayName = ?, SearchName = ? WHERE CategoryId = ?")
                .bind(category.display_name())
                .bind(search_key(category.display_name()))
                .bind(category.category_id().to_string())
                .execute(self.pool.inner())
                .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::not_found("Category", category.category_id()));
        }
        Ok(())
    }

    async fn remove(&self, id: CategoryId) -> CatalogResult<bool> {
        debug!("Removing category: {}", id);

        let result = sqlx::query("DELETE FROM Category WHERE CategoryId = ?")
            .bind(id.to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl CategoryRepository for SqliteCategoryRepository {}
