//! Read models returned by the [`CatalogReadStore`](crate::CatalogReadStore).

use catalog_core::{
    CatalogCategoryId, CatalogId, CatalogProductId, CategoryId, Page, ProductId,
};
use chrono::{DateTime, Utc};

/// One row of the catalog list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    pub catalog_id: CatalogId,
    pub display_name: String,
    pub total_categories: u64,
}

/// One category of a catalog, with how many products it lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogCategorySummary {
    pub catalog_category_id: CatalogCategoryId,
    pub category_id: CategoryId,
    pub display_name: String,
    pub parent_id: Option<CatalogCategoryId>,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
    pub total_products: u64,
}

#[derive(Debug, Clone)]
pub struct CatalogDetailView {
    pub catalog_id: CatalogId,
    pub display_name: String,
    pub categories: Page<CatalogCategorySummary>,
}

/// One product listed in a catalog category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogProductSummary {
    pub catalog_product_id: CatalogProductId,
    pub product_id: ProductId,
    pub display_name: String,
    pub is_displayed: bool,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct CatalogCategoryDetailView {
    pub catalog_id: CatalogId,
    pub catalog_name: String,
    pub catalog_category_id: CatalogCategoryId,
    pub category_id: CategoryId,
    pub display_name: String,
    pub parent_id: Option<CatalogCategoryId>,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
    pub products: Page<CatalogProductSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogProductDetailView {
    pub catalog_id: CatalogId,
    pub catalog_name: String,
    pub catalog_category_id: CatalogCategoryId,
    pub catalog_category_name: String,
    pub catalog_product_id: CatalogProductId,
    pub product_id: ProductId,
    pub product_name: String,
    pub display_name: String,
    pub is_displayed: bool,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
}

/// One row of the category list, with how many catalogs use it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category_id: CategoryId,
    pub display_name: String,
    pub total_catalogs: u64,
}

/// A catalog a category is placed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalogItem {
    pub catalog_id: CatalogId,
    pub catalog_name: String,
    pub catalog_category_id: CatalogCategoryId,
    pub display_name: String,
}

#[derive(Debug, Clone)]
pub struct CategoryDetailView {
    pub category_id: CategoryId,
    pub display_name: String,
    pub catalogs: Page<CategoryCatalogItem>,
}

/// One row of the product list, with how many catalog categories list it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSummary {
    pub product_id: ProductId,
    pub product_name: String,
    pub total_catalog_categories: u64,
}

/// A catalog category a product is listed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCatalogCategoryItem {
    pub catalog_id: CatalogId,
    pub catalog_name: String,
    pub catalog_category_id: CatalogCategoryId,
    pub catalog_category_name: String,
    pub catalog_product_id: CatalogProductId,
    pub display_name: String,
}

#[derive(Debug, Clone)]
pub struct ProductDetailView {
    pub product_id: ProductId,
    pub product_name: String,
    pub catalog_categories: Page<ProductCatalogCategoryItem>,
}
