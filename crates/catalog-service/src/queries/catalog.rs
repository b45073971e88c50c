use crate::checks::{check_id, required, RequiredIds};
use crate::dto::{
    CatalogCategoryDetailResult, CatalogCollectionResult, CatalogDetailResult, CatalogItem,
    CatalogProductDetail, CatalogProductDetailResult,
};
use async_trait::async_trait;
use catalog_core::{
    CatalogCategoryId, CatalogError, CatalogId, CatalogProductId, CatalogResult, Request,
    RequestHandler, SearchRequest, ValidationFailures,
};
use catalog_repository::CatalogReadStore;
use std::sync::Arc;
use tracing::debug;

/// Lists catalogs, optionally filtered by name.
#[derive(Debug, Clone, Default)]
pub struct GetCatalogCollection {
    pub search: SearchRequest,
}

impl Request for GetCatalogCollection {
    type Response = CatalogCollectionResult;
    const NAME: &'static str = "GetCatalogCollection";
}

pub struct GetCatalogCollectionHandler {
    read_store: Arc<dyn CatalogReadStore>,
}

impl GetCatalogCollectionHandler {
    #[must_use]
    pub fn new(read_store: Arc<dyn CatalogReadStore>) -> Self {
        Self { read_store }
    }
}

#[async_trait]
impl RequestHandler<GetCatalogCollection> for GetCatalogCollectionHandler {
    async fn handle(&self, request: GetCatalogCollection) -> CatalogResult<CatalogCollectionResult> {
        let page = self.read_store.catalog_collection(&request.search).await?;
        debug!(total = page.total_elements(), "Catalog collection loaded");

        Ok(CatalogCollectionResult {
            total_catalogs: page.total_elements(),
            catalog_items: page.map(CatalogItem::from).content,
        })
    }
}

/// A catalog with a page of its categories, filtered by category name.
#[derive(Debug, Clone)]
pub struct GetCatalogDetail {
    pub catalog_id: Option<CatalogId>,
    pub search: SearchRequest,
}

impl Request for GetCatalogDetail {
    type Response = CatalogDetailResult;
    const NAME: &'static str = "GetCatalogDetail";
}

impl RequiredIds for GetCatalogDetail {
    fn check_ids(&self, failures: &mut ValidationFailures) {
        check_id(failures, "catalog_id", "CatalogId", self.catalog_id);
    }
}

pub struct GetCatalogDetailHandler {
    read_store: Arc<dyn CatalogReadStore>,
}

impl GetCatalogDetailHandler {
    #[must_use]
    pub fn new(read_store: Arc<dyn CatalogReadStore>) -> Self {
        Self { read_store }
    }
}

#[async_trait]
impl RequestHandler<GetCatalogDetail> for GetCatalogDetailHandler {
    async fn handle(&self, request: GetCatalogDetail) -> CatalogResult<CatalogDetailResult> {
        let catalog_id = required(request.catalog_id, "catalog_id", "CatalogId")?;

        self.read_store
            .catalog_detail(catalog_id, &request.search)
            .await?
            .map(CatalogDetailResult::from)
            .ok_or_else(|| CatalogError::not_found("Catalog", catalog_id))
    }
}

/// A catalog category with a page of its products, filtered by display name.
#[derive(Debug, Clone)]
pub struct GetCatalogCategoryDetail {
    pub catalog_id: Option<CatalogId>,
    pub catalog_category_id: Option<CatalogCategoryId>,
    pub search: SearchRequest,
}

impl Request for GetCatalogCategoryDetail {
    type Response = CatalogCategoryDetailResult;
    const NAME: &'static str = "GetCatalogCategoryDetail";
}

impl RequiredIds for GetCatalogCategoryDetail {
    fn check_ids(&self, failures: &mut ValidationFailures) {
        check_id(failures, "catalog_id", "CatalogId", self.catalog_id);
        check_id(
            failures,
            "catalog_category_id",
            "CatalogCategoryId",
            self.catalog_category_id,
        );
    }
}

pub struct GetCatalogCategoryDetailHandler {
    read_store: Arc<dyn CatalogReadStore>,
}

impl GetCatalogCategoryDetailHandler {
    #[must_use]
    pub fn new(read_store: Arc<dyn CatalogReadStore>) -> Self {
        Self { read_store }
    }
}

#[async_trait]
impl RequestHandler<GetCatalogCategoryDetail> for GetCatalogCategoryDetailHandler {
    async fn handle(
        &self,
        request: GetCatalogCategoryDetail,
    ) -> CatalogResult<CatalogCategoryDetailResult> {
        let catalog_id = required(request.catalog_id, "catalog_id", "CatalogId")?;
        let catalog_category_id = required(
            request.catalog_category_id,
            "catalog_category_id",
            "CatalogCategoryId",
        )?;

        self.read_store
            .catalog_category_detail(catalog_id, catalog_category_id, &request.search)
            .await?
            .map(CatalogCategoryDetailResult::from)
            .ok_or_else(|| CatalogError::not_found("CatalogCategory", catalog_category_id))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GetCatalogProductDetail {
    pub catalog_id: Option<CatalogId>,
    pub catalog_category_id: Option<CatalogCategoryId>,
    pub catalog_product_id: Option<CatalogProductId>,
}

impl Request for GetCatalogProductDetail {
    type Response = CatalogProductDetailResult;
    const NAME: &'static str = "GetCatalogProductDetail";
}

impl RequiredIds for GetCatalogProductDetail {
    fn check_ids(&self, failures: &mut ValidationFailures) {
        check_id(failures, "catalog_id", "CatalogId", self.catalog_id);
        check_id(
            failures,
            "catalog_category_id",
            "CatalogCategoryId",
            self.catalog_category_id,
        );
        check_id(
            failures,
            "catalog_product_id",
            "CatalogProductId",
            self.catalog_product_id,
        );
    }
}

pub struct GetCatalogProductDetailHandler {
    read_store: Arc<dyn CatalogReadStore>,
}

impl GetCatalogProductDetailHandler {
    #[must_use]
    pub fn new(read_store: Arc<dyn CatalogReadStore>) -> Self {
        Self { read_store }
    }
}

#[async_trait]
impl RequestHandler<GetCatalogProductDetail> for GetCatalogProductDetailHandler {
    async fn handle(
        &self,
        request: GetCatalogProductDetail,
    ) -> CatalogResult<CatalogProductDetailResult> {
        let catalog_id = required(request.catalog_id, "catalog_id", "CatalogId")?;
        let catalog_category_id = required(
            request.catalog_category_id,
            "catalog_category_id",
            "CatalogCategoryId",
        )?;
        let catalog_product_id = required(
            request.catalog_product_id,
            "catalog_product_id",
            "CatalogProductId",
        )?;

        let view = self
            .read_store
            .catalog_product_detail(catalog_id, catalog_category_id, catalog_product_id)
            .await?
            .ok_or_else(|| CatalogError::not_found("CatalogProduct", catalog_product_id))?;

        Ok(CatalogProductDetailResult {
            catalog_product_detail: CatalogProductDetail::from(view),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_ids_are_checked_per_field() {
        let mut failures = ValidationFailures::new();
        GetCatalogProductDetail {
            catalog_id: Some(CatalogId::new()),
            catalog_category_id: None,
            catalog_product_id: None,
        }
        .check_ids(&mut failures);

        assert_eq!(failures.len(), 2);
        assert!(!failures.has_error_for("catalog_id"));
        assert_eq!(failures.errors()[0].message, "CatalogCategoryId is empty or invalid.");
        assert_eq!(failures.errors()[1].field, "catalog_product_id");
    }

    #[test]
    fn test_catalog_detail_requires_id() {
        let mut failures = ValidationFailures::new();
        GetCatalogDetail {
            catalog_id: None,
            search: SearchRequest::default(),
        }
        .check_ids(&mut failures);

        assert!(failures.has_error_for("catalog_id"));
    }
}
