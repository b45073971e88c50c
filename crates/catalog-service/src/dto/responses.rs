//! Results returned by commands and queries.

use catalog_core::{
    CatalogCategoryId, CatalogId, CatalogProductId, CategoryId, ProductId,
};
use catalog_repository::{
    CatalogCategoryDetailView, CatalogCategorySummary, CatalogDetailView,
    CatalogProductDetailView, CatalogProductSummary, CatalogSummary, CategoryCatalogItem,
    CategoryDetailView, CategorySummary, ProductCatalogCategoryItem, ProductDetailView,
    ProductSummary,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Command results

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogCreated {
    pub catalog_id: CatalogId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogCategoryCreated {
    pub catalog_category_id: CatalogCategoryId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogProductCreated {
    pub catalog_product_id: CatalogProductId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryCreated {
    pub category_id: CategoryId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductCreated {
    pub product_id: ProductId,
}

// Catalogs

/// A catalog in the catalog list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogItem {
    pub catalog_id: CatalogId,
    pub display_name: String,
    pub total_categories: u64,
}

impl From<CatalogSummary> for CatalogItem {
    fn from(summary: CatalogSummary) -> Self {
        Self {
            catalog_id: summary.catalog_id,
            display_name: summary.display_name,
            total_categories: summary.total_categories,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogCollectionResult {
    pub total_catalogs: u64,
    pub catalog_items: Vec<CatalogItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogDetail {
    pub catalog_id: CatalogId,
    pub display_name: String,
}

/// A category placed in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogCategoryItem {
    pub catalog_category_id: CatalogCategoryId,
    pub category_id: CategoryId,
    pub display_name: String,
    pub parent_id: Option<CatalogCategoryId>,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
    pub total_products: u64,
}

impl From<CatalogCategorySummary> for CatalogCategoryItem {
    fn from(summary: CatalogCategorySummary) -> Self {
        Self {
            catalog_category_id: summary.catalog_category_id,
            category_id: summary.category_id,
            display_name: summary.display_name,
            parent_id: summary.parent_id,
            available_from: summary.available_from,
            available_to: summary.available_to,
            total_products: summary.total_products,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogDetailResult {
    pub catalog_detail: CatalogDetail,
    pub total_catalog_categories: u64,
    pub catalog_categories: Vec<CatalogCategoryItem>,
}

impl From<CatalogDetailView> for CatalogDetailResult {
    fn from(view: CatalogDetailView) -> Self {
        Self {
            catalog_detail: CatalogDetail {
                catalog_id: view.catalog_id,
                display_name: view.display_name,
            },
            total_catalog_categories: view.categories.total_elements(),
            catalog_categories: view.categories.map(CatalogCategoryItem::from).content,
        }
    }
}

// Catalog categories

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogCategoryDetail {
    pub catalog_id: CatalogId,
    pub catalog_name: String,
    pub catalog_category_id: CatalogCategoryId,
    pub category_id: CategoryId,
    pub display_name: String,
    pub parent_id: Option<CatalogCategoryId>,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
}

/// A product listed in a catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogProductItem {
    pub catalog_product_id: CatalogProductId,
    pub product_id: ProductId,
    pub display_name: String,
    pub is_displayed: bool,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
}

impl From<CatalogProductSummary> for CatalogProductItem {
    fn from(summary: CatalogProductSummary) -> Self {
        Self {
            catalog_product_id: summary.catalog_product_id,
            product_id: summary.product_id,
            display_name: summary.display_name,
            is_displayed: summary.is_displayed,
            available_from: summary.available_from,
            available_to: summary.available_to,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogCategoryDetailResult {
    pub catalog_category_detail: CatalogCategoryDetail,
    pub total_catalog_products: u64,
    pub catalog_products: Vec<CatalogProductItem>,
}

impl From<CatalogCategoryDetailView> for CatalogCategoryDetailResult {
    fn from(view: CatalogCategoryDetailView) -> Self {
        Self {
            catalog_category_detail: CatalogCategoryDetail {
                catalog_id: view.catalog_id,
                catalog_name: view.catalog_name,
                catalog_category_id: view.catalog_category_id,
                category_id: view.category_id,
                display_name: view.display_name,
                parent_id: view.parent_id,
                available_from: view.available_from,
                available_to: view.available_to,
            },
            total_catalog_products: view.products.total_elements(),
            catalog_products: view.products.map(CatalogProductItem::from).content,
        }
    }
}

// Catalog products

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogProductDetail {
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

impl From<CatalogProductDetailView> for CatalogProductDetail {
    fn from(view: CatalogProductDetailView) -> Self {
        Self {
            catalog_id: view.catalog_id,
            catalog_name: view.catalog_name,
            catalog_category_id: view.catalog_category_id,
            catalog_category_name: view.catalog_category_name,
            catalog_product_id: view.catalog_product_id,
            product_id: view.product_id,
            product_name: view.product_name,
            display_name: view.display_name,
            is_displayed: view.is_displayed,
            available_from: view.available_from,
            available_to: view.available_to,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogProductDetailResult {
    pub catalog_product_detail: CatalogProductDetail,
}

// Categories

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryItem {
    pub category_id: CategoryId,
    pub display_name: String,
    pub total_catalogs: u64,
}

impl From<CategorySummary> for CategoryItem {
    fn from(summary: CategorySummary) -> Self {
        Self {
            category_id: summary.category_id,
            display_name: summary.display_name,
            total_catalogs: summary.total_catalogs,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryCollectionResult {
    pub total_categories: u64,
    pub categories: Vec<CategoryItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDetail {
    pub category_id: CategoryId,
    pub display_name: String,
}

/// A catalog that places the category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryCatalogEntry {
    pub catalog_id: CatalogId,
    pub catalog_name: String,
    pub catalog_category_id: CatalogCategoryId,
    pub display_name: String,
}

impl From<CategoryCatalogItem> for CategoryCatalogEntry {
    fn from(item: CategoryCatalogItem) -> Self {
        Self {
            catalog_id: item.catalog_id,
            catalog_name: item.catalog_name,
            catalog_category_id: item.catalog_category_id,
            display_name: item.display_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDetailResult {
    pub category_detail: CategoryDetail,
    pub total_catalogs: u64,
    pub catalog_items: Vec<CategoryCatalogEntry>,
}

impl From<CategoryDetailView> for CategoryDetailResult {
    fn from(view: CategoryDetailView) -> Self {
        Self {
            category_detail: CategoryDetail {
                category_id: view.category_id,
                display_name: view.display_name,
            },
            total_catalogs: view.catalogs.total_elements(),
            catalog_items: view.catalogs.map(CategoryCatalogEntry::from).content,
        }
    }
}

// Products

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub total_catalog_categories: u64,
}

impl From<ProductSummary> for ProductItem {
    fn from(summary: ProductSummary) -> Self {
        Self {
            product_id: summary.product_id,
            product_name: summary.product_name,
            total_catalog_categories: summary.total_catalog_categories,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductCollectionResult {
    pub total_products: u64,
    pub products: Vec<ProductItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductDetail {
    pub product_id: ProductId,
    pub product_name: String,
}

/// A catalog category listing the product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductCatalogCategoryEntry {
    pub catalog_id: CatalogId,
    pub catalog_name: String,
    pub catalog_category_id: CatalogCategoryId,
    pub catalog_category_name: String,
    pub catalog_product_id: CatalogProductId,
    pub display_name: String,
}

impl From<ProductCatalogCategoryItem> for ProductCatalogCategoryEntry {
    fn from(item: ProductCatalogCategoryItem) -> Self {
        Self {
            catalog_id: item.catalog_id,
            catalog_name: item.catalog_name,
            catalog_category_id: item.catalog_category_id,
            catalog_category_name: item.catalog_category_name,
            catalog_product_id: item.catalog_product_id,
            display_name: item.display_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDetailResult {
    pub product_detail: ProductDetail,
    pub total_catalog_categories: u64,
    pub catalog_category_items: Vec<ProductCatalogCategoryEntry>,
}

impl From<ProductDetailView> for ProductDetailResult {
    fn from(view: ProductDetailView) -> Self {
        Self {
            product_detail: ProductDetail {
                product_id: view.product_id,
                product_name: view.product_name,
            },
            total_catalog_categories: view.catalog_categories.total_elements(),
            catalog_category_items: view
                .catalog_categories
                .map(ProductCatalogCategoryEntry::from)
                .content,
        }
    }
}
