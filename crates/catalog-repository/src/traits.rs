//! Repository and read-store trait definitions.

use crate::read_models::{
    CatalogCategoryDetailView, CatalogDetailView, CatalogProductDetailView, CatalogSummary,
    CategoryDetailView, CategorySummary, ProductDetailView, ProductSummary,
};
use async_trait::async_trait;
use catalog_core::{
    CatalogCategoryId, CatalogId, CatalogProductId, CatalogResult, CategoryId, Interface, Page,
    ProductId, Repository, SearchRequest,
};
use catalog_domain::{Catalog, Category, Product};

/// Persistence of whole `Catalog` aggregates.
pub trait CatalogRepository: Repository<Catalog> + Interface {}

/// Persistence of `Category` aggregates.
pub trait CategoryRepository: Repository<Category> + Interface {}

/// Persistence of `Product` aggregates.
pub trait ProductRepository: Repository<Product> + Interface {}

/// Query-side projections.
///
/// Returns flattened views with precomputed totals instead of aggregates;
/// nothing returned here is ever written back.
#[async_trait]
pub trait CatalogReadStore: Interface + Send + Sync {
    /// Catalogs whose display name matches the search term.
    async fn catalog_collection(&self, search: &SearchRequest) -> CatalogResult<Page<CatalogSummary>>;

    /// A catalog with a page of its categories.
    async fn catalog_detail(
        &self,
        catalog_id: CatalogId,
        search: &SearchRequest,
    ) -> CatalogResult<Option<CatalogDetailView>>;

    /// A catalog category with a page of its products.
    async fn catalog_category_detail(
        &self,
        catalog_id: CatalogId,
        catalog_category_id: CatalogCategoryId,
        search: &SearchRequest,
    ) -> CatalogResult<Option<CatalogCategoryDetailView>>;

    /// A single product listed in a catalog category.
    async fn catalog_product_detail(
        &self,
        catalog_id: CatalogId,
        catalog_category_id: CatalogCategoryId,
        catalog_product_id: CatalogProductId,
    ) -> CatalogResult<Option<CatalogProductDetailView>>;

    /// Categories whose display name matches the search term.
    async fn category_collection(&self, search: &SearchRequest) -> CatalogResult<Page<CategorySummary>>;

    /// A category with a page of the catalogs it is placed in.
    async fn category_detail(
        &self,
        category_id: CategoryId,
        search: &SearchRequest,
    ) -> CatalogResult<Option<CategoryDetailView>>;

    /// Products whose name matches the search term.
    async fn product_collection(&self, search: &SearchRequest) -> CatalogResult<Page<ProductSummary>>;

    /// A product with a page of the catalog categories listing it.
    async fn product_detail(
        &self,
        product_id: ProductId,
        search: &SearchRequest,
    ) -> CatalogResult<Option<ProductDetailView>>;
}
