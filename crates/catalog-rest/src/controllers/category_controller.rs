//! Category controller.

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
    CategoryCollectionResult, CategoryCreated, CategoryDetailResult, CategoryRequest, GetCategoryCollection,
    GetCategoryDetail, RemoveCategory,
};
use tracing::debug;

/// Creates the category router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/:category_id",
            get(get_category).put(update_category).delete(remove_category),
        )
}

/// List categories.
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of categories", body = CategoryCollectionResult)
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> ApiResult<CategoryCollectionResult> {
    debug!("List categories request");

    let result = state
        .mediator
        .send(GetCategoryCollection {
            search: query.into(),
        })
        .await?;
    ok(result)
}

/// Create a category.
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryCreated),
        (status = 400, description = "Validation failed", body = catalog_core::ErrorResponse)
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    CatalogJson(request): CatalogJson<CategoryRequest>,
) -> CreatedResult<CategoryCreated> {
    debug!("Create category request: {}", request.display_name);

    let result = state.mediator.send(request.into_create()).await?;
    Ok(created(result))
}

/// Get a category with a page of the catalogs it is placed in.
#[utoipa::path(
    get,
    path = "/categories/{category_id}",
    tag = "categories",
    params(("category_id" = String, Path, description = "Category id"), PaginationQuery),
    responses(
        (status = 200, description = "Category detail", body = CategoryDetailResult),
        (status = 404, description = "Category not found", body = catalog_core::ErrorResponse)
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    Query(query): Query<PaginationQuery>,
) -> ApiResult<CategoryDetailResult> {
    debug!("Get category request: {}", category_id);

    let result = state
        .mediator
        .send(GetCategoryDetail {
            category_id: path_id(&category_id),
            search: query.into(),
        })
        .await?;
    ok(result)
}

/// Rename a category.
#[utoipa::path(
    put,
    path = "/categories/{category_id}",
    tag = "categories",
    params(("category_id" = String, Path, description = "Category id")),
    request_body = CategoryRequest,
    responses(
        (status = 204, description = "Category updated"),
        (status = 400, description = "Validation failed", body = catalog_core::ErrorResponse)
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    CatalogJson(request): CatalogJson<CategoryRequest>,
) -> Result<StatusCode, AppError> {
    debug!("Update category request: {}", category_id);

    state
        .mediator
        .send(request.into_update(path_id(&category_id)))
        .await?;
    Ok(no_content())
}

/// Remove a category. Catalogs drop their entries for it.
#[utoipa::path(
    delete,
    path = "/categories/{category_id}",
    tag = "categories",
    params(("category_id" = String, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category removed"),
        (status = 400, description = "Validation failed", body = catalog_core::ErrorResponse)
    )
)]
pub async fn remove_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Remove category request: {}", category_id);

    state
        .mediator
        .send(RemoveCategory {
            category_id: path_id(&category_id),
        })
        .await?;
    Ok(no_content())
}
