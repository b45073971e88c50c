//! SQLite catalog repository implementation.
//!
//! A catalog is stored across three tables. Loading reads all of them and
//! rebuilds the aggregate; saving rewrites the catalog's category and
//! product rows inside one transaction, so the stored tree always matches
//! a state the aggregate has validated.

use super::{parse_id, parse_optional_id, to_i64};
use crate::{traits::CatalogRepository, DatabasePoolInterface};
use async_trait::async_trait;
use catalog_core::{
    search_key, CatalogCategoryId, CatalogError, CatalogId, CatalogResult, Repository,
};
use catalog_domain::{Catalog, CatalogCategory, CatalogProduct};
use chrono::{DateTime, Utc};
use shaku::Component;
use sqlx::{FromRow, SqliteConnection};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// SQLite catalog repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = CatalogRepository)]
pub struct SqliteCatalogRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl SqliteCatalogRepository {
    /// Creates a new SQLite catalog repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CatalogRow {
    catalog_id: String,
    display_name: String,
}

#[derive(Debug, FromRow)]
struct CatalogCategoryRow {
    catalog_category_id: String,
    catalog_id: String,
    category_id: String,
    display_name: String,
    parent_id: Option<String>,
    available_from: Option<DateTime<Utc>>,
    available_to: Option<DateTime<Utc>>,
}

#[derive(Debug, FromRow)]
struct CatalogProductRow {
    catalog_product_id: String,
    catalog_category_id: String,
    product_id: String,
    display_name: String,
    is_displayed: bool,
    available_from: Option<DateTime<Utc>>,
    available_to: Option<DateTime<Utc>>,
}

impl TryFrom<CatalogProductRow> for CatalogProduct {
    type Error = CatalogError;

    fn try_from(row: CatalogProductRow) -> Result<Self, Self::Error> {
        Ok(CatalogProduct::restore(
            parse_id("CatalogProductId", &row.catalog_product_id)?,
            parse_id("CatalogCategoryId", &row.catalog_category_id)?,
            parse_id("ProductId", &row.product_id)?,
            row.display_name,
            row.is_displayed,
            row.available_from,
            row.available_to,
        ))
    }
}

fn restore_category(
    row: CatalogCategoryRow,
    products: &mut HashMap<CatalogCategoryId, Vec<CatalogProduct>>,
) -> CatalogResult<CatalogCategory> {
    let catalog_category_id: CatalogCategoryId =
        parse_id("CatalogCategoryId", &row.catalog_category_id)?;

    Ok(CatalogCategory::restore(
        catalog_category_id,
        parse_id("CatalogId", &row.catalog_id)?,
        parse_id("CategoryId", &row.category_id)?,
        row.display_name,
        parse_optional_id("ParentId", row.parent_id.as_deref())?,
        row.available_from,
        row.available_to,
        products.remove(&catalog_category_id).unwrap_or_default(),
    ))
}

/// Inserts every category and product of `catalog`, parents first.
async fn insert_children(conn: &mut SqliteConnection, catalog: &Catalog) -> CatalogResult<()> {
    for (position, category) in catalog.categories().iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO CatalogCategory
                (CatalogCategoryId, CatalogId, CategoryId, DisplayName, SearchName,
                 ParentId, AvailableFrom, AvailableTo, Position)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(category.catalog_category_id().to_string())
        .bind(catalog.catalog_id().to_string())
        .bind(category.category_id().to_string())
        .bind(category.display_name())
        .bind(search_key(category.display_name()))
        .bind(category.parent_id().map(|id| id.to_string()))
        .bind(category.available_from())
        .bind(category.available_to())
        .bind(to_i64(position))
        .execute(&mut *conn)
        .await?;

        for (position, product) in category.products().iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO CatalogProduct
                    (CatalogProductId, CatalogCategoryId, ProductId, DisplayName,
                     SearchName, IsDisplayed, AvailableFrom, AvailableTo, Position)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(product.catalog_product_id().to_string())
            .bind(category.catalog_category_id().to_string())
            .bind(product.product_id().to_string())
            .bind(product.display_name())
            .bind(search_key(product.display_name()))
            .bind(product.is_displayed())
            .bind(product.available_from())
            .bind(product.available_to())
            .bind(to_i64(position))
            .execute(&mut *conn)
            .await?;
        }
    }
    Ok(())
}

#[async_trait]
impl Repository<Catalog> for SqliteCatalogRepository {
    async fn find_by_id(&self, id: CatalogId) -> CatalogResult<Option<Catalog>> {
        debug!("Finding catalog by id: {}", id);
        let catalog_id = id.to_string();

        let Some(row) = sqlx::query_as::<_, CatalogRow>(
            "SELECT CatalogId AS catalog_id, DisplayName AS display_name FROM Catalog WHERE CatalogId = ?",
        )
        .bind(&catalog_id)
        .fetch_optional(self.pool.inner())
        .await?
        else {
            return Ok(None);
        };

        let category_rows = sqlx::query_as::<_, CatalogCategoryRow>(
            r#"
            SELECT CatalogCategoryId AS catalog_category_id, CatalogId AS catalog_id,
                   CategoryId AS category_id, DisplayName AS display_name,
                   ParentId AS parent_id, AvailableFrom AS available_from,
                   AvailableTo AS available_to
            FROM CatalogCategory
            WHERE CatalogId = ?
            ORDER BY Position
            "#,
        )
        .bind(&catalog_id)
        .fetch_all(self.pool.inner())
        .await?;

        let product_rows = sqlx::query_as::<_, CatalogProductRow>(
            r#"
            SELECT cp.CatalogProductId AS catalog_product_id,
                   cp.CatalogCategoryId AS catalog_category_id,
                   cp.ProductId AS product_id, cp.DisplayName AS display_name,
                   cp.IsDisplayed AS is_displayed, cp.AvailableFrom AS available_from,
                   cp.AvailableTo AS available_to
            FROM CatalogProduct cp
            INNER JOIN CatalogCategory cc ON cc.CatalogCategoryId = cp.CatalogCategoryId
            WHERE cc.CatalogId = ?
            ORDER BY cp.Position
            "#,
        )
        .bind(&catalog_id)
        .fetch_all(self.pool.inner())
        .await?;

        let mut products: HashMap<CatalogCategoryId, Vec<CatalogProduct>> = HashMap::new();
        for product_row in product_rows {
            let product = CatalogProduct::try_from(product_row)?;
            products
                .entry(product.catalog_category_id())
                .or_default()
                .push(product);
        }

        let categories = category_rows
            .into_iter()
            .map(|row| restore_category(row, &mut products))
            .collect::<CatalogResult<Vec<_>>>()?;

        Ok(Some(Catalog::restore(
            parse_id("CatalogId", &row.catalog_id)?,
            row.display_name,
            categories,
        )))
    }

    async fn exists(&self, id: CatalogId) -> CatalogResult<bool> {
        let result: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM Catalog WHERE CatalogId = ? LIMIT 1")
                .bind(id.to_string())
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(result.is_some())
    }

    async fn add(&self, catalog: &Catalog) -> CatalogResult<()> {
        debug!(
            "Adding catalog: {} with {} categories",
            catalog.catalog_id(),
            catalog.categories().len()
        );

        let mut tx = self.pool.inner().begin().await?;

        sqlx::query("INSERT INTO Catalog (CatalogId, DisplayName, SearchName) VALUES (?, ?, ?)")
            .bind(catalog.catalog_id().to_string())
            .bind(catalog.display_name())
            .bind(search_key(catalog.display_name()))
            .execute(&mut *tx)
            .await?;
        insert_children(&mut *tx, catalog).await?;

        tx.commit().await?;
        Ok(())
    }

    async fn update(&self, catalog: &Catalog) -> CatalogResult<()> {
        debug!("Updating catalog: {}", catalog.catalog_id());
        let catalog_id = catalog.catalog_id().to_string();

        let mut tx = self.pool.inner().begin().await?;

        let result =
            sqlx::query("UPDATE Catalog SET DisplayName = ?, SearchName = ? WHERE CatalogId = ?")
                .bind(catalog.display_name())
                .bind(search_key(catalog.display_name()))
                .bind(&catalog_id)
                .execute(&mut *tx)
                .await?;
        if result.rows_affected() == 0 {
            return Err(CatalogError::not_found("Catalog", catalog.catalog_id()));
        }

        // Products go with their categories through ON DELETE CASCADE.
        sqlx::query("DELETE FROM CatalogCategory WHERE CatalogId = ?")
            .bind(&catalog_id)
            .execute(&mut *tx)
            .await?;
        insert_children(&mut *tx, catalog).await?;

        tx.commit().await?;
        Ok(())
    }

    async fn remove(&self, id: CatalogId) -> CatalogResult<bool> {
        debug!("Removing catalog: {}", id);

        let result = sqlx::query("DELETE FROM Catalog WHERE CatalogId = ?")
            .bind(id.to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl CatalogRepository for SqliteCatalogRepository {}
