//! SQLite product repository implementation.

use super::parse_id;
use crate::{traits::ProductRepository, DatabasePoolInterface};
use async_trait::async_trait;
use catalog_core::{search_key, CatalogError, CatalogResult, ProductId, Repository};
use catalog_domain::Product;
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// SQLite product repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = ProductRepository)]
pub struct SqliteProductRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl SqliteProductRepository {
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    product_id: String,
    product_name: String,
}

impl TryFrom<ProductRow> for Product {
    type Error = CatalogError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product::restore(
            parse_id("ProductId", &row.product_id)?,
            row.product_name,
        ))
    }
}

#[async_trait]
impl Repository<Product> for SqliteProductRepository {
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        debug!("Finding product by id: {}", id);

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT ProductId AS product_id, ProductName AS product_name
            FROM Product
            WHERE ProductId = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Product::try_from).transpose()
    }

    async fn exists(&self, id: ProductId) -> CatalogResult<bool> {
        let result: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM Product WHERE ProductId = ? LIMIT 1")
                .bind(id.to_string())
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(result.is_some())
    }

    async fn add(&self, product: &Product) -> CatalogResult<()> {
        debug!("Adding product: {}", product.product_id());

        sqlx::query("INSERT INTO Product (ProductId, ProductName, SearchName) VALUES (?, ?, ?)")
            .bind(product.product_id().to_string())
            .bind(product.name())
            .bind(search_key(product.name()))
            .execute(self.pool.inner())
            .await?;

        Ok(())
    }

    async fn update(&self, product: &Product) -> CatalogResult<()> {
        debug!("Updating product: {}", product.product_id());

        let result =
            sqlx::query("UPDATE Product SET ProductName = ?, SearchName = ? WHERE ProductId = ?")
                .bind(product.name())
                .bind(search_key(product.name()))
                .bind(product.product_id().to_string())
                .execute(self.pool.inner())
                .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::not_found("Product", product.product_id()));
        }
        Ok(())
    }

    async fn remove(&self, id: ProductId) -> CatalogResult<bool> {
        debug!("Removing product: {}", id);

        let result = sqlx::query("DELETE FROM Product WHERE ProductId = ?")
            .bind(id.to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl ProductRepository for SqliteProductRepository {}
