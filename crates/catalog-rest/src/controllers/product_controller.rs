//! Product controller.

use crate::{
    extractors::{path_id, CatalogJson, PaginationQuery},
    responses::{created, no_content, ok, ApiResult, AppError, CreatedResult},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use catalog_service::{
    ProductCollectionResult, ProductCreated, ProductDetailResult, ProductRequest, GetProductCollection,
    GetProductDetail, RemoveProduct,
};
use tracing::debug;

/// Creates the product router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:product_id",
            get(get_product).put(update_product).delete(remove_product),
        )
}

/// List products.
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of products", body = ProductCollectionResult)
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> ApiResult<ProductCollectionResult> {
    debug!("List products request");

    let result = state
        .mediator
        .send(GetProductCollection {
            search: query.into(),
        })
        .await?;
    ok(result)
}

/// Create a product.
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductCreated),
        (status = 400, description = "Validation failed", body = catalog_core::ErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    CatalogJson(request): CatalogJson<ProductRequest>,
) -> CreatedResult<ProductCreated> {
    debug!("Create product request: {}", request.product_name);

    let result = state.mediator.send(request.into_create()).await?;
    Ok(created(result))
}

/// Get a product with a page of the catalog categories listing it.
#[utoipa::path(
    get,
    path = "/products/{product_id}",
    tag = "products",
    params(("product_id" = String, Path, description = "Product id"), PaginationQuery),
    responses(
        (status = 200, description = "Product detail", body = ProductDetailResult),
        (status = 404, description = "Product not found", body = catalog_core::ErrorResponse)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Query(query): Query<PaginationQuery>,
) -> ApiResult<ProductDetailResult> {
    debug!("Get product request: {}", product_id);

    let result = state
        .mediator
        .send(GetProductDetail {
            product_id: path_id(&product_id),
            search: query.into(),
        })
        .await?;
    ok(result)
}

/// Rename a product.
#[utoipa::path(
    put,
    path = "/products/{product_id}",
    tag = "products",
    params(("product_id" = String, Path, description = "Product id")),
    request_body = ProductRequest,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, description = "Validation failed", body = catalog_core::ErrorResponse)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    CatalogJson(request): CatalogJson<ProductRequest>,
) -> Result<StatusCode, AppError> {
    debug!("Update product request: {}", product_id);

    state
        .mediator
        .send(request.into_update(path_id(&product_id)))
        .await?;
    Ok(no_content())
}

/// Remove a product. Catalog categories drop their listings of it.
#[utoipa::path(
    delete,
    path = "/products/{product_id}",
    tag = "products",
    params(("product_id" = String, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product removed"),
        (status = 400, description = "Validation failed", body = catalog_core::ErrorResponse)
    )
)]
pub async fn remove_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Remove product request: {}", product_id);

    state
        .mediator
        .send(RemoveProduct {
            product_id: path_id(&product_id),
        })
        .await?;
    Ok(no_content())
}
