//! OpenAPI documentation configuration.

use crate::controllers::{HealthResponse, ReadinessResponse};
use catalog_core::{
    CatalogCategoryId, CatalogId, CatalogProductId, CategoryId, ErrorResponse, FieldError,
    ProductId,
};
use catalog_service::{
    CatalogCategoryCreated, CatalogCategoryDetail, CatalogCategoryDetailResult,
    CatalogCategoryEntryRequest, CatalogCategoryItem, CatalogCollectionResult, CatalogCreated,
    CatalogDetail, CatalogDetailResult, CatalogItem, CatalogProductCreated, CatalogProductDetail,
    CatalogProductDetailResult, CatalogProductItem, CategoryCatalogEntry, CategoryCollectionResult,
    CategoryCreated, CategoryDetail, CategoryDetailResult, CategoryItem, CategoryRequest,
    CreateCatalogCategoryRequest, CreateCatalogProductRequest, CreateCatalogRequest,
    ProductCatalogCategoryEntry, ProductCollectionResult, ProductCreated, ProductDetail,
    ProductDetailResult, ProductItem, ProductRequest, UpdateCatalogCategoryRequest,
    UpdateCatalogProductRequest, UpdateCatalogRequest,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the catalog API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Catalog API",
        version = "1.0.0",
        description = "Catalogs, categories and products",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api", description = "Catalog API")
    ),
    paths(
        // Catalog endpoints
        crate::controllers::catalog_controller::list_catalogs,
        crate::controllers::catalog_controller::create_catalog,
        crate::controllers::catalog_controller::get_catalog,
        crate::controllers::catalog_controller::update_catalog,
        crate::controllers::catalog_controller::remove_catalog,
        crate::controllers::catalog_controller::create_catalog_category,
        crate::controllers::catalog_controller::get_catalog_category,
        crate::controllers::catalog_controller::update_catalog_category,
        crate::controllers::catalog_controller::remove_catalog_category,
        crate::controllers::catalog_controller::create_catalog_product,
        crate::controllers::catalog_controller::get_catalog_product,
        crate::controllers::catalog_controller::update_catalog_product,
        crate::controllers::catalog_controller::remove_catalog_product,
        // Category endpoints
        crate::controllers::category_controller::list_categories,
        crate::controllers::category_controller::create_category,
        crate::controllers::category_controller::get_category,
        crate::controllers::category_controller::update_category,
        crate::controllers::category_controller::remove_category,
        // Product endpoints
        crate::controllers::product_controller::list_products,
        crate::controllers::product_controller::create_product,
        crate::controllers::product_controller::get_product,
        crate::controllers::product_controller::update_product,
        crate::controllers::product_controller::remove_product,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            // Core types
            CatalogId,
            CatalogCategoryId,
            CatalogProductId,
            CategoryId,
            ProductId,
            ErrorResponse,
            FieldError,
            HealthResponse,
            ReadinessResponse,
            // Request bodies
            CreateCatalogRequest,
            CatalogCategoryEntryRequest,
            UpdateCatalogRequest,
            CreateCatalogCategoryRequest,
            UpdateCatalogCategoryRequest,
            CreateCatalogProductRequest,
            UpdateCatalogProductRequest,
            CategoryRequest,
            ProductRequest,
            // Command results
            CatalogCreated,
            CatalogCategoryCreated,
            CatalogProductCreated,
            CategoryCreated,
            ProductCreated,
            // Query results
            CatalogCollectionResult,
            CatalogItem,
            CatalogDetailResult,
            CatalogDetail,
            CatalogCategoryItem,
            CatalogCategoryDetailResult,
            CatalogCategoryDetail,
            CatalogProductItem,
            CatalogProductDetailResult,
            CatalogProductDetail,
            CategoryCollectionResult,
            CategoryItem,
            CategoryDetailResult,
            CategoryDetail,
            CategoryCatalogEntry,
            ProductCollectionResult,
            ProductItem,
            ProductDetailResult,
            ProductDetail,
            ProductCatalogCategoryEntry,
        )
    ),
    tags(
        (name = "catalogs", description = "Catalogs, their categories and listed products"),
        (name = "categories", description = "Category management"),
        (name = "products", description = "Product management"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
