//! SQLite read store.
//!
//! Every collection query comes in pairs: a `COUNT(*)` with the filter only
//! and a page query with the filter plus `LIMIT`/`OFFSET`. Search terms are
//! matched with `SearchName LIKE ? ESCAPE '\'` against the pattern built by
//! [`SearchRequest::like_pattern`]. `SearchName` holds the
//! [`search_key`](catalog_core::search_key) of the row's name.

use super::{parse_id, parse_optional_id, to_count, to_i64};
use crate::read_models::{
    CatalogCategoryDetailView, CatalogCategorySummary, CatalogDetailView,
    CatalogProductDetailView, CatalogProductSummary, CatalogSummary, CategoryCatalogItem,
    CategoryDetailView, CategorySummary, ProductCatalogCategoryItem, ProductDetailView,
    ProductSummary,
};
use crate::{traits::CatalogReadStore, DatabasePoolInterface};
use async_trait::async_trait;
use catalog_core::{
    CatalogCategoryId, CatalogError, CatalogId, CatalogProductId, CatalogResult, CategoryId, Page,
    ProductId, SearchRequest,
};
use chrono::{DateTime, Utc};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// SQLite implementation of [`CatalogReadStore`].
#[derive(Component, Clone)]
#[shaku(interface = CatalogReadStore)]
pub struct SqliteCatalogReadStore {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl SqliteCatalogReadStore {
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CatalogSummaryRow {
    catalog_id: String,
    display_name: String,
    total_categories: i64,
}

impl TryFrom<CatalogSummaryRow> for CatalogSummary {
    type Error = CatalogError;

    fn try_from(row: CatalogSummaryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            catalog_id: parse_id("CatalogId", &row.catalog_id)?,
            display_name: row.display_name,
            total_categories: to_count(row.total_categories),
        })
    }
}

#[derive(Debug, FromRow)]
struct NamedRow {
    id: String,
    name: String,
}

#[derive(Debug, FromRow)]
struct CatalogCategorySummaryRow {
    catalog_category_id: String,
    category_id: String,
    display_name: String,
    parent_id: Option<String>,
    available_from: Option<DateTime<Utc>>,
    available_to: Option<DateTime<Utc>>,
    total_products: i64,
}

impl TryFrom<CatalogCategorySummaryRow> for CatalogCategorySummary {
    type Error = CatalogError;

    fn try_from(row: CatalogCategorySummaryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            catalog_category_id: parse_id("CatalogCategoryId", &row.catalog_category_id)?,
            category_id: parse_id("CategoryId", &row.category_id)?,
            display_name: row.display_name,
            parent_id: parse_optional_id("ParentId", row.parent_id.as_deref())?,
            available_from: row.available_from,
            available_to: row.available_to,
            total_products: to_count(row.total_products),
        })
    }
}

#[derive(Debug, FromRow)]
struct CatalogCategoryHeaderRow {
    catalog_id: String,
    catalog_name: String,
    catalog_category_id: String,
    category_id: String,
    display_name: String,
    parent_id: Option<String>,
    available_from: Option<DateTime<Utc>>,
    available_to: Option<DateTime<Utc>>,
}

#[derive(Debug, FromRow)]
struct CatalogProductSummaryRow {
    catalog_product_id: String,
    product_id: String,
    display_name: String,
    is_displayed: bool,
    available_from: Option<DateTime<Utc>>,
    available_to: Option<DateTime<Utc>>,
}

impl TryFrom<CatalogProductSummaryRow> for CatalogProductSummary {
    type Error = CatalogError;

    fn try_from(row: CatalogProductSummaryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            catalog_product_id: parse_id("CatalogProductId", &row.catalog_product_id)?,
            product_id: parse_id("ProductId", &row.product_id)?,
            display_name: row.display_name,
            is_displayed: row.is_displayed,
            available_from: row.available_from,
            available_to: row.available_to,
        })
    }
}

#[derive(Debug, FromRow)]
struct CatalogProductDetailRow {
    catalog_id: String,
    catalog_name: String,
    catalog_category_id: String,
    catalog_category_name: String,
    catalog_product_id: String,
    product_id: String,
    product_name: String,
    display_name: String,
    is_displayed: bool,
    available_from: Option<DateTime<Utc>>,
    available_to: Option<DateTime<Utc>>,
}

impl TryFrom<CatalogProductDetailRow> for CatalogProductDetailView {
    type Error = CatalogError;

    fn try_from(row: CatalogProductDetailRow) -> Result<Self, Self::Error> {
        Ok(Self {
            catalog_id: parse_id("CatalogId", &row.catalog_id)?,
            catalog_name: row.catalog_name,
            catalog_category_id: parse_id("CatalogCategoryId", &row.catalog_category_id)?,
            catalog_category_name: row.catalog_category_name,
            catalog_product_id: parse_id("CatalogProductId", &row.catalog_product_id)?,
            product_id: parse_id("ProductId", &row.product_id)?,
            product_name: row.product_name,
            display_name: row.display_name,
            is_displayed: row.is_displayed,
            available_from: row.available_from,
            available_to: row.available_to,
        })
    }
}

#[derive(Debug, FromRow)]
struct CategorySummaryRow {
    category_id: String,
    display_name: String,
    total_catalogs: i64,
}

impl TryFrom<CategorySummaryRow> for CategorySummary {
    type Error = CatalogError;

    fn try_from(row: CategorySummaryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            category_id: parse_id("CategoryId", &row.category_id)?,
            display_name: row.display_name,
            total_catalogs: to_count(row.total_catalogs),
        })
    }
}

#[derive(Debug, FromRow)]
struct CategoryCatalogItemRow {
    catalog_id: String,
    catalog_name: String,
    catalog_category_id: String,
    display_name: String,
}

impl TryFrom<CategoryCatalogItemRow> for CategoryCatalogItem {
    type Error = CatalogError;

    fn try_from(row: CategoryCatalogItemRow) -> Result<Self, Self::Error> {
        Ok(Self {
            catalog_id: parse_id("CatalogId", &row.catalog_id)?,
            catalog_name: row.catalog_name,
            catalog_category_id: parse_id("CatalogCategoryId", &row.catalog_category_id)?,
            display_name: row.display_name,
        })
    }
}

#[derive(Debug, FromRow)]
struct ProductSummaryRow {
    product_id: String,
    product_name: String,
    total_catalog_categories: i64,
}

impl TryFrom<ProductSummaryRow> for ProductSummary {
    type Error = CatalogError;

    fn try_from(row: ProductSummaryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            product_id: parse_id("ProductId", &row.product_id)?,
            product_name: row.product_name,
            total_catalog_categories: to_count(row.total_catalog_categories),
        })
    }
}

#[derive(Debug, FromRow)]
struct ProductCatalogCategoryItemRow {
    catalog_id: String,
    catalog_name: String,
    catalog_category_id: String,
    catalog_category_name: String,
    catalog_product_id: String,
    display_name: String,
}

impl TryFrom<ProductCatalogCategoryItemRow> for ProductCatalogCategoryItem {
    type Error = CatalogError;

    fn try_from(row: ProductCatalogCategoryItemRow) -> Result<Self, Self::Error> {
        Ok(Self {
            catalog_id: parse_id("CatalogId", &row.catalog_id)?,
            catalog_name: row.catalog_name,
            catalog_category_id: parse_id("CatalogCategoryId", &row.catalog_category_id)?,
            catalog_category_name: row.catalog_category_name,
            catalog_product_id: parse_id("CatalogProductId", &row.catalog_product_id)?,
            display_name: row.display_name,
        })
    }
}

fn collect<R, T>(rows: Vec<R>) -> CatalogResult<Vec<T>>
where
    T: TryFrom<R, Error = CatalogError>,
{
    rows.into_iter().map(T::try_from).collect()
}

#[async_trait]
impl CatalogReadStore for SqliteCatalogReadStore {
    async fn catalog_collection(&self, search: &SearchRequest) -> CatalogResult<Page<CatalogSummary>> {
        debug!(
            "Listing catalogs, term: {:?}, page: {}, size: {}",
            search.term(),
            search.page.page_index,
            search.page.page_size
        );
        let pattern = search.like_pattern();

        let total: i64 = sqlx::query_scalar(
            r"SELECT COUNT(*) FROM Catalog WHERE SearchName LIKE ? ESCAPE '\'",
        )
        .bind(&pattern)
        .fetch_one(self.pool.inner())
        .await?;

        let rows = sqlx::query_as::<_, CatalogSummaryRow>(
            r"
            SELECT c.CatalogId AS catalog_id, c.DisplayName AS display_name,
                   (SELECT COUNT(*) FROM CatalogCategory cc
                    WHERE cc.CatalogId = c.CatalogId) AS total_categories
            FROM Catalog c
            WHERE c.SearchName LIKE ? ESCAPE '\'
            ORDER BY c.DisplayName, c.CatalogId
            LIMIT ? OFFSET ?
            ",
        )
        .bind(&pattern)
        .bind(to_i64(search.page.limit()))
        .bind(to_i64(search.page.offset()))
        .fetch_all(self.pool.inner())
        .await?;

        Ok(Page::new(collect(rows)?, search.page, to_count(total)))
    }

    async fn catalog_detail(
        &self,
        catalog_id: CatalogId,
        search: &SearchRequest,
    ) -> CatalogResult<Option<CatalogDetailView>> {
        debug!("Loading catalog detail: {}", catalog_id);
        let id = catalog_id.to_string();

        let Some(header) = sqlx::query_as::<_, NamedRow>(
            "SELECT CatalogId AS id, DisplayName AS name FROM Catalog WHERE CatalogId = ?",
        )
        .bind(&id)
        .fetch_optional(self.pool.inner())
        .await?
        else {
            return Ok(None);
        };

        let pattern = search.like_pattern();
        let total: i64 = sqlx::query_scalar(
            r"
            SELECT COUNT(*) FROM CatalogCategory
            WHERE CatalogId = ? AND SearchName LIKE ? ESCAPE '\'
            ",
        )
        .bind(&id)
        .bind(&pattern)
        .fetch_one(self.pool.inner())
        .await?;

        let rows = sqlx::query_as::<_, CatalogCategorySummaryRow>(
            r"
            SELECT cc.CatalogCategoryId AS catalog_category_id, cc.CategoryId AS category_id,
                   cc.DisplayName AS display_name, cc.ParentId AS parent_id,
                   cc.AvailableFrom AS available_from, cc.AvailableTo AS available_to,
                   (SELECT COUNT(*) FROM CatalogProduct cp
                    WHERE cp.CatalogCategoryId = cc.CatalogCategoryId) AS total_products
            FROM CatalogCategory cc
            WHERE cc.CatalogId = ? AND cc.SearchName LIKE ? ESCAPE '\'
            ORDER BY cc.Position
            LIMIT ? OFFSET ?
            ",
        )
        .bind(&id)
        .bind(&pattern)
        .bind(to_i64(search.page.limit()))
        .bind(to_i64(search.page.offset()))
        .fetch_all(self.pool.inner())
        .await?;

        Ok(Some(CatalogDetailView {
            catalog_id: parse_id("CatalogId", &header.id)?,
            display_name: header.name,
            categories: Page::new(collect(rows)?, search.page, to_count(total)),
        }))
    }

    async fn catalog_category_detail(
        &self,
        catalog_id: CatalogId,
        catalog_category_id: CatalogCategoryId,
        search: &SearchRequest,
    ) -> CatalogResult<Option<CatalogCategoryDetailView>> {
        debug!(
            "Loading catalog category detail: {} in catalog {}",
            catalog_category_id, catalog_id
        );
        let id = catalog_category_id.to_string();

        let Some(header) = sqlx::query_as::<_, CatalogCategoryHeaderRow>(
            r#"
            SELECT c.CatalogId AS catalog_id, c.DisplayName AS catalog_name,
                   cc.CatalogCategoryId AS catalog_category_id, cc.CategoryId AS category_id,
                   cc.DisplayName AS display_name, cc.ParentId AS parent_id,
                   cc.AvailableFrom AS available_from, cc.AvailableTo AS available_to
            FROM CatalogCategory cc
            INNER JOIN Catalog c ON c.CatalogId = cc.CatalogId
            WHERE cc.CatalogId = ? AND cc.CatalogCategoryId = ?
            "#,
        )
        .bind(catalog_id.to_string())
        .bind(&id)
        .fetch_optional(self.pool.inner())
        .await?
        else {
            return Ok(None);
        };

        let pattern = search.like_pattern();
        let total: i64 = sqlx::query_scalar(
            r"
            SELECT COUNT(*) FROM CatalogProduct
            WHERE CatalogCategoryId = ? AND SearchName LIKE ? ESCAPE '\'
            ",
        )
        .bind(&id)
        .bind(&pattern)
        .fetch_one(self.pool.inner())
        .await?;

        let rows = sqlx::query_as::<_, CatalogProductSummaryRow>(
            r"
            SELECT CatalogProductId AS catalog_product_id, ProductId AS product_id,
                   DisplayName AS display_name, IsDisplayed AS is_displayed,
                   AvailableFrom AS available_from, AvailableTo AS available_to
            FROM CatalogProduct
            WHERE CatalogCategoryId = ? AND SearchName LIKE ? ESCAPE '\'
            ORDER BY Position
            LIMIT ? OFFSET ?
            ",
        )
        .bind(&id)
        .bind(&pattern)
        .bind(to_i64(search.page.limit()))
        .bind(to_i64(search.page.offset()))
        .fetch_all(self.pool.inner())
        .await?;

        Ok(Some(CatalogCategoryDetailView {
            catalog_id: parse_id("CatalogId", &header.catalog_id)?,
            catalog_name: header.catalog_name,
            catalog_category_id: parse_id("CatalogCategoryId", &header.catalog_category_id)?,
            category_id: parse_id("CategoryId", &header.category_id)?,
            display_name: header.display_name,
            parent_id: parse_optional_id("ParentId", header.parent_id.as_deref())?,
            available_from: header.available_from,
            available_to: header.available_to,
            products: Page::new(collect(rows)?, search.page, to_count(total)),
        }))
    }

    async fn catalog_product_detail(
        &self,
        catalog_id: CatalogId,
        catalog_category_id: CatalogCategoryId,
        catalog_product_id: CatalogProductId,
    ) -> CatalogResult<Option<CatalogProductDetailView>> {
        debug!("Loading catalog product detail: {}", catalog_product_id);

        let row = sqlx::query_as::<_, CatalogProductDetailRow>(
            r#"
            SELECT c.CatalogId AS catalog_id, c.DisplayName AS catalog_name,
                   cc.CatalogCategoryId AS catalog_category_id,
                   cc.DisplayName AS catalog_category_name,
                   cp.CatalogProductId AS catalog_product_id, p.ProductId AS product_id,
                   p.ProductName AS product_name, cp.DisplayName AS display_name,
                   cp.IsDisplayed AS is_displayed, cp.AvailableFrom AS available_from,
                   cp.AvailableTo AS available_to
            FROM CatalogProduct cp
            INNER JOIN CatalogCategory cc ON cc.CatalogCategoryId = cp.CatalogCategoryId
            INNER JOIN Catalog c ON c.CatalogId = cc.CatalogId
            INNER JOIN Product p ON p.ProductId = cp.ProductId
            WHERE c.CatalogId = ? AND cc.CatalogCategoryId = ? AND cp.CatalogProductId = ?
            "#,
        )
        .bind(catalog_id.to_string())
        .bind(catalog_category_id.to_string())
        .bind(catalog_product_id.to_string())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(CatalogProductDetailView::try_from).transpose()
    }

    async fn category_collection(&self, search: &SearchRequest) -> CatalogResult<Page<CategorySummary>> {
        debug!(
            "Listing categories, term: {:?}, page: {}, size: {}",
            search.term(),
            search.page.page_index,
            search.page.page_size
        );
        let pattern = search.like_pattern();

        let total: i64 = sqlx::query_scalar(
            r"SELECT COUNT(*) FROM Category WHERE SearchName LIKE ? ESCAPE '\'",
        )
        .bind(&pattern)
        .fetch_one(self.pool.inner())
        .await?;

        let rows = sqlx::query_as::<_, CategorySummaryRow>(
            r"
            SELECT c.CategoryId AS category_id, c.DisplayName AS display_name,
                   (SELECT COUNT(*) FROM CatalogCategory cc
                    WHERE cc.CategoryId = c.CategoryId) AS total_catalogs
            FROM Category c
            WHERE c.SearchName LIKE ? ESCAPE '\'
            ORDER BY c.DisplayName, c.CategoryId
            LIMIT ? OFFSET ?
            ",
        )
        .bind(&pattern)
        .bind(to_i64(search.page.limit()))
        .bind(to_i64(search.page.offset()))
        .fetch_all(self.pool.inner())
        .await?;

        Ok(Page::new(collect(rows)?, search.page, to_count(total)))
    }

    async fn category_detail(
        &self,
        category_id: CategoryId,
        search: &SearchRequest,
    ) -> CatalogResult<Option<CategoryDetailView>> {
        debug!("Loading category detail: {}", category_id);
        let id = category_id.to_string();

        let Some(header) = sqlx::query_as::<_, NamedRow>(
            "SELECT CategoryId AS id, DisplayName AS name FROM Category WHERE CategoryId = ?",
        )
        .bind(&id)
        .fetch_optional(self.pool.inner())
        .await?
        else {
            return Ok(None);
        };

        let pattern = search.like_pattern();
        let total: i64 = sqlx::query_scalar(
            r"
            SELECT COUNT(*)
            FROM CatalogCategory cc
            INNER JOIN Catalog c ON c.CatalogId = cc.CatalogId
            WHERE cc.CategoryId = ? AND c.SearchName LIKE ? ESCAPE '\'
            ",
        )
        .bind(&id)
        .bind(&pattern)
        .fetch_one(self.pool.inner())
        .await?;

        let rows = sqlx::query_as::<_, CategoryCatalogItemRow>(
            r"
            SELECT c.CatalogId AS catalog_id, c.DisplayName AS catalog_name,
                   cc.CatalogCategoryId AS catalog_category_id, cc.DisplayName AS display_name
            FROM CatalogCategory cc
            INNER JOIN Catalog c ON c.CatalogId = cc.CatalogId
            WHERE cc.CategoryId = ? AND c.SearchName LIKE ? ESCAPE '\'
            ORDER BY c.DisplayName, c.CatalogId
            LIMIT ? OFFSET ?
            ",
        )
        .bind(&id)
        .bind(&pattern)
        .bind(to_i64(search.page.limit()))
        .bind(to_i64(search.page.offset()))
        .fetch_all(self.pool.inner())
        .await?;

        Ok(Some(CategoryDetailView {
            category_id: parse_id("CategoryId", &header.id)?,
            display_name: header.name,
            catalogs: Page::new(collect(rows)?, search.page, to_count(total)),
        }))
    }

    async fn product_collection(&self, search: &SearchRequest) -> CatalogResult<Page<ProductSummary>> {
        debug!(
            "Listing products, term: {:?}, page: {}, size: {}",
            search.term(),
            search.page.page_index,
            search.page.page_size
        );
        let pattern = search.like_pattern();

        let total: i64 = sqlx::query_scalar(
            r"SELECT COUNT(*) FROM Product WHERE SearchName LIKE ? ESCAPE '\'",
        )
        .bind(&pattern)
        .fetch_one(self.pool.inner())
        .await?;

        let rows = sqlx::query_as::<_, ProductSummaryRow>(
            r"
            SELECT p.ProductId AS product_id, p.ProductName AS product_name,
                   (SELECT COUNT(*) FROM CatalogProduct cp
                    WHERE cp.ProductId = p.ProductId) AS total_catalog_categories
            FROM Product p
            WHERE p.SearchName LIKE ? ESCAPE '\'
            ORDER BY p.ProductName, p.ProductId
            LIMIT ? OFFSET ?
            ",
        )
        .bind(&pattern)
        .bind(to_i64(search.page.limit()))
        .bind(to_i64(search.page.offset()))
        .fetch_all(self.pool.inner())
        .await?;

        Ok(Page::new(collect(rows)?, search.page, to_count(total)))
    }

    async fn product_detail(
        &self,
        product_id: ProductId,
        search: &SearchRequest,
    ) -> CatalogResult<Option<ProductDetailView>> {
        debug!("Loading product detail: {}", product_id);
        let id = product_id.to_string();

        let Some(header) = sqlx::query_as::<_, NamedRow>(
            "SELECT ProductId AS id, ProductName AS name FROM Product WHERE ProductId = ?",
        )
        .bind(&id)
        .fetch_optional(self.pool.inner())
        .await?
        else {
            return Ok(None);
        };

        let pattern = search.like_pattern();
        let total: i64 = sqlx::query_scalar(
            r"
            SELECT COUNT(*)
            FROM CatalogProduct cp
            INNER JOIN CatalogCategory cc ON cc.CatalogCategoryId = cp.CatalogCategoryId
            WHERE cp.ProductId = ? AND cc.SearchName LIKE ? ESCAPE '\'
            ",
        )
        .bind(&id)
        .bind(&pattern)
        .fetch_one(self.pool.inner())
        .await?;

        let rows = sqlx::query_as::<_, ProductCatalogCategoryItemRow>(
            r"
            SELECT c.CatalogId AS catalog_id, c.DisplayName AS catalog_name,
                   cc.CatalogCategoryId AS catalog_category_id,
                   cc.DisplayName AS catalog_category_name,
                   cp.CatalogProductId AS catalog_product_id, cp.DisplayName AS display_name
            FROM CatalogProduct cp
            INNER JOIN CatalogCategory cc ON cc.CatalogCategoryId = cp.CatalogCategoryId
            INNER JOIN Catalog c ON c.CatalogId = cc.CatalogId
            WHERE cp.ProductId = ? AND cc.SearchName LIKE ? ESCAPE '\'
            ORDER BY c.DisplayName, cc.DisplayName, cp.CatalogProductId
            LIMIT ? OFFSET ?
            ",
        )
        .bind(&id)
        .bind(&pattern)
        .bind(to_i64(search.page.limit()))
        .bind(to_i64(search.page.offset()))
        .fetch_all(self.pool.inner())
        .await?;

        Ok(Some(ProductDetailView {
            product_id: parse_id("ProductId", &header.id)?,
            product_name: header.name,
            catalog_categories: Page::new(collect(rows)?, search.page, to_count(total)),
        }))
    }
}
