//! Catalog controller: catalogs, their categories and listed products.

use crate::{
    extractors::{path_id, CatalogJson, PaginationQuery},
    responses::{created, no_content, ok, ApiResult, AppError, CreatedResult},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use catalog_service::{
    CatalogCategoryCreated, CatalogCategoryDetailResult, CatalogCollectionResult,
    CatalogCreated, CatalogDetailResult, CatalogProductCreated, CatalogProductDetailResult,
    CreateCatalogCategoryRequest, CreateCatalogProductRequest, CreateCatalogRequest,
    GetCatalogCategoryDetail, GetCatalogCollection, GetCatalogDetail, GetCatalogProductDetail,
    RemoveCatalog, RemoveCatalogCategory, RemoveCatalogProduct, UpdateCatalogCategoryRequest,
    UpdateCatalogProductRequest, UpdateCatalogRequest,
};
use tracing::debug;

/// Creates the catalog router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_catalogs).post(create_catalog))
        .route(
            "/:catalog_id",
            get(get_catalog).put(update_catalog).delete(remove_catalog),
        )
        .route("/:catalog_id/categories", post(create_catalog_category))
        .route(
            "/:catalog_id/categories/:catalog_category_id",
            get(get_catalog_category)
                .put(update_catalog_category)
                .delete(remove_catalog_category),
        )
        .route(
            "/:catalog_id/categories/:catalog_category_id/products",
            post(create_catalog_product),
        )
        .route(
            "/:catalog_id/categories/:catalog_category_id/products/:catalog_product_id",
            get(get_catalog_product)
                .put(update_catalog_product)
                .delete(remove_catalog_product),
        )
}

/// List catalogs.
#[utoipa::path(
    get,
    path = "/catalogs",
    tag = "catalogs",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of catalogs", body = CatalogCollectionResult)
    )
)]
pub async fn list_catalogs(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> ApiResult<CatalogCollectionResult> {
    debug!("List catalogs request");

    let result = state
        .mediator
        .send(GetCatalogCollection {
            search: query.into(),
        })
        .await?;
    ok(result)
}

/// Create a catalog, optionally with root categories.
#[utoipa::path(
    post,
    path = "/catalogs",
    tag = "catalogs",
    request_body = CreateCatalogRequest,
    responses(
        (status = 201, description = "Catalog created", body = CatalogCreated),
        (status = 400, description = "Validation failed", body = catalog_core::ErrorResponse)
    )
)]
pub async fn create_catalog(
    State(state): State<AppState>,
    CatalogJson(request): CatalogJson<CreateCatalogRequest>,
) -> CreatedResult<CatalogCreated> {
    debug!("Create catalog request: {}", request.display_name);

    let result = state.mediator.send(request.into_command()).await?;
    Ok(created(result))
}

/// Get a catalog with a page of its categories.
#[utoipa::path(
    get,
    path = "/catalogs/{catalog_id}",
    tag = "catalogs",
    params(("catalog_id" = String, Path, description = "Catalog id"), PaginationQuery),
    responses(
        (status = 200, description = "Catalog detail", body = CatalogDetailResult),
        (status = 404, description = "Catalog not found", body = catalog_core::ErrorResponse)
    )
)]
pub async fn get_catalog(
    State(state): State<AppState>,
    Path(catalog_id): Path<String>,
    Query(query): Query<PaginationQuery>,
) -> ApiResult<CatalogDetailResult> {
    debug!("Get catalog request: {}", catalog_id);

    let result = state
        .mediator
        .send(GetCatalogDetail {
            catalog_id: path_id(&catalog_id),
            search: query.into(),
        })
        .await?;
    ok(result)
}

/// Rename a catalog.
#[utoipa::path(
    put,
    path = "/catalogs/{catalog_id}",
    tag = "catalogs",
    params(("catalog_id" = String, Path, description = "Catalog id")),
    request_body = UpdateCatalogRequest,
    responses(
        (status = 204, description = "Catalog updated"),
        (status = 400, description = "Validation failed", body = catalog_core::ErrorResponse)
    )
)]
pub async fn update_catalog(
    State(state): State<AppState>,
    Path(catalog_id): Path<String>,
    CatalogJson(request): CatalogJson<UpdateCatalogRequest>,
) -> Result<StatusCode, AppError> {
    debug!("Update catalog request: {}", catalog_id);

    state
        .mediator
        .send(request.into_command(path_id(&catalog_id)))
        .await?;
    Ok(no_content())
}

/// Remove a catalog with everything it owns.
#[utoipa::path(
    delete,
    path = "/catalogs/{catalog_id}",
    tag = "catalogs",
    params(("catalog_id" = String, Path, description = "Catalog id")),
    responses(
        (status = 204, description = "Catalog removed"),
        (status = 400, description = "Validation failed", body = catalog_core::ErrorResponse)
    )
)]
pub async fn remove_catalog(
    State(state): State<AppState>,
    Path(catalog_id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Remove catalog request: {}", catalog_id);

    state
        .mediator
        .send(RemoveCatalog {
            catalog_id: path_id(&catalog_id),
        })
        .await?;
    Ok(no_content())
}

/// Place a category in a catalog.
#[utoipa::path(
    post,
    path = "/catalogs/{catalog_id}/categories",
    tag = "catalogs",
    params(("catalog_id" = String, Path, description = "Catalog id")),
    request_body = CreateCatalogCategoryRequest,
    responses(
        (status = 201, description = "Category placed", body = CatalogCategoryCreated),
        (status = 400, description = "Validation failed", body = catalog_core::ErrorResponse)
    )
)]
pub async fn create_catalog_category(
    State(state): State<AppState>,
    Path(catalog_id): Path<String>,
    CatalogJson(request): CatalogJson<CreateCatalogCategoryRequest>,
) -> CreatedResult<CatalogCategoryCreated> {
    debug!("Create catalog category request: {}", catalog_id);

    let result = state
        .mediator
        .send(request.into_command(path_id(&catalog_id)))
        .await?;
    Ok(created(result))
}

/// Get a catalog category with a page of its products.
#[utoipa::path(
    get,
    path = "/catalogs/{catalog_id}/categories/{catalog_category_id}",
    tag = "catalogs",
    params(
        ("catalog_id" = String, Path, description = "Catalog id"),
        ("catalog_category_id" = String, Path, description = "Catalog category id"),
        PaginationQuery
    ),
    responses(
        (status = 200, description = "Catalog category detail", body = CatalogCategoryDetailResult),
        (status = 404, description = "Catalog category not found", body = catalog_core::ErrorResponse)
    )
)]
pub async fn get_catalog_category(
    State(state): State<AppState>,
    Path((catalog_id, catalog_category_id)): Path<(String, String)>,
    Query(query): Query<PaginationQuery>,
) -> ApiResult<CatalogCategoryDetailResult> {
    debug!(
        "Get catalog category request: {}/{}",
        catalog_id, catalog_category_id
    );

    let result = state
        .mediator
        .send(GetCatalogCategoryDetail {
            catalog_id: path_id(&catalog_id),
            catalog_category_id: path_id(&catalog_category_id),
            search: query.into(),
        })
        .await?;
    ok(result)
}

/// Rename a catalog category.
#[utoipa::path(
    put,
    path = "/catalogs/{catalog_id}/categories/{catalog_category_id}",
    tag = "catalogs",
    params(
        ("catalog_id" = String, Path, description = "Catalog id"),
        ("catalog_category_id" = String, Path, description = "Catalog category id")
    ),
    request_body = UpdateCatalogCategoryRequest,
    responses(
        (status = 204, description = "Catalog category updated"),
        (status = 400, description = "Validation failed", body = catalog_core::ErrorResponse)
    )
)]
pub async fn update_catalog_category(
    State(state): State<AppState>,
    Path((catalog_id, catalog_category_id)): Path<(String, String)>,
    CatalogJson(request): CatalogJson<UpdateCatalogCategoryRequest>,
) -> Result<StatusCode, AppError> {
    debug!(
        "Update catalog category request: {}/{}",
        catalog_id, catalog_category_id
    );

    state
        .mediator
        .send(request.into_command(path_id(&catalog_id), path_id(&catalog_category_id)))
        .await?;
    Ok(no_content())
}

/// Remove a catalog category and all categories below it.
#[utoipa::path(
    delete,
    path = "/catalogs/{catalog_id}/categories/{catalog_category_id}",
    tag = "catalogs",
    params(
        ("catalog_id" = String, Path, description = "Catalog id"),
        ("catalog_category_id" = String, Path, description = "Catalog category id")
    ),
    responses(
        (status = 204, description = "Catalog category removed"),
        (status = 400, description = "Validation failed", body = catalog_core::ErrorResponse)
    )
)]
pub async fn remove_catalog_category(
    State(state): State<AppState>,
    Path((catalog_id, catalog_category_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    debug!(
        "Remove catalog category request: {}/{}",
        catalog_id, catalog_category_id
    );

    state
        .mediator
        .send(RemoveCatalogCategory {
            catalog_id: path_id(&catalog_id),
            catalog_category_id: path_id(&catalog_category_id),
        })
        .await?;
    Ok(no_content())
}

/// List a product under a catalog category.
#[utoipa::path(
    post,
    path = "/catalogs/{catalog_id}/categories/{catalog_category_id}/products",
    tag = "catalogs",
    params(
        ("catalog_id" = String, Path, description = "Catalog id"),
        ("catalog_category_id" = String, Path, description = "Catalog category id")
    ),
    request_body = CreateCatalogProductRequest,
    responses(
        (status = 201, description = "Product listed", body = CatalogProductCreated),
        (status = 400, description = "Validation failed", body = catalog_core::ErrorResponse)
    )
)]
pub async fn create_catalog_product(
    State(state): State<AppState>,
    Path((catalog_id, catalog_category_id)): Path<(String, String)>,
    CatalogJson(request): CatalogJson<CreateCatalogProductRequest>,
) -> CreatedResult<CatalogProductCreated> {
    debug!(
        "Create catalog product request: {}/{}",
        catalog_id, catalog_category_id
    );

    let result = state
        .mediator
        .send(request.into_command(path_id(&catalog_id), path_id(&catalog_category_id)))
        .await?;
    Ok(created(result))
}

/// Get a product listed in a catalog category.
#[utoipa::path(
    get,
    path = "/catalogs/{catalog_id}/categories/{catalog_category_id}/products/{catalog_product_id}",
    tag = "catalogs",
    params(
        ("catalog_id" = String, Path, description = "Catalog id"),
        ("catalog_category_id" = String, Path, description = "Catalog category id"),
        ("catalog_product_id" = String, Path, description = "Catalog product id")
    ),
    responses(
        (status = 200, description = "Catalog product detail", body = CatalogProductDetailResult),
        (status = 404, description = "Catalog product not found", body = catalog_core::ErrorResponse)
    )
)]
pub async fn get_catalog_product(
    State(state): State<AppState>,
    Path((catalog_id, catalog_category_id, catalog_product_id)): Path<(String, String, String)>,
) -> ApiResult<CatalogProductDetailResult> {
    debug!("Get catalog product request: {}", catalog_product_id);

    let result = state
        .mediator
        .send(GetCatalogProductDetail {
            catalog_id: path_id(&catalog_id),
            catalog_category_id: path_id(&catalog_category_id),
            catalog_product_id: path_id(&catalog_product_id),
        })
        .await?;
    ok(result)
}

/// Change how a listed product is shown.
#[utoipa::path(
    put,
    path = "/catalogs/{catalog_id}/categories/{catalog_category_id}/products/{catalog_product_id}",
    tag = "catalogs",
    params(
        ("catalog_id" = String, Path, description = "Catalog id"),
        ("catalog_category_id" = String, Path, description = "Catalog category id"),
        ("catalog_product_id" = String, Path, description = "Catalog product id")
    ),
    request_body = UpdateCatalogProductRequest,
    responses(
        (status = 204, description = "Catalog product updated"),
        (status = 400, description = "Validation failed", body = catalog_core::ErrorResponse)
    )
)]
pub async fn update_catalog_product(
    State(state): State<AppState>,
    Path((catalog_id, catalog_category_id, catalog_product_id)): Path<(String, String, String)>,
    CatalogJson(request): CatalogJson<UpdateCatalogProductRequest>,
) -> Result<StatusCode, AppError> {
    debug!("Update catalog product request: {}", catalog_product_id);

    state
        .mediator
        .send(request.into_command(
            path_id(&catalog_id),
            path_id(&catalog_category_id),
            path_id(&catalog_product_id),
        ))
        .await?;
    Ok(no_content())
}

/// Remove a listed product from its catalog category.
#[utoipa::path(
    delete,
    path = "/catalogs/{catalog_id}/categories/{catalog_category_id}/products/{catalog_product_id}",
    tag = "catalogs",
    params(
        ("catalog_id" = String, Path, description = "Catalog id"),
        ("catalog_category_id" = String, Path, description = "Catalog category id"),
        ("catalog_product_id" = String, Path, description = "Catalog product id")
    ),
    responses(
        (status = 204, description = "Catalog product removed"),
        (status = 400, description = "Validation failed", body = catalog_core::ErrorResponse)
    )
)]
pub async fn remove_catalog_product(
    State(state): State<AppState>,
    Path((catalog_id, catalog_category_id, catalog_product_id)): Path<(String, String, String)>,
) -> Result<StatusCode, AppError> {
    debug!("Remove catalog product request: {}", catalog_product_id);

    state
        .mediator
        .send(RemoveCatalogProduct {
            catalog_id: path_id(&catalog_id),
            catalog_category_id: path_id(&catalog_category_id),
            catalog_product_id: path_id(&catalog_product_id),
        })
        .await?;
    Ok(no_content())
}
