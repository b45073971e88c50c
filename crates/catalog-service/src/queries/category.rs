use crate::checks::{check_id, required, RequiredIds};
use crate::dto::{CategoryCollectionResult, CategoryDetailResult, CategoryItem};
use async_trait::async_trait;
use catalog_core::{
    CatalogError, CatalogResult, CategoryId, Request, RequestHandler, SearchRequest,
    ValidationFailures,
};
use catalog_repository::CatalogReadStore;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct GetCategoryCollection {
    pub search: SearchRequest,
}

impl Request for GetCategoryCollection {
    type Response = CategoryCollectionResult;
    const NAME: &'static str = "GetCategoryCollection";
}

pub struct GetCategoryCollectionHandler {
    read_store: Arc<dyn CatalogReadStore>,
}

impl GetCategoryCollectionHandler {
    #[must_use]
    pub fn new(read_store: Arc<dyn CatalogReadStore>) -> Self {
        Self { read_store }
    }
}

#[async_trait]
impl RequestHandler<GetCategoryCollection> for GetCategoryCollectionHandler {
    async fn handle(
        &self,
        request: GetCategoryCollection,
    ) -> CatalogResult<CategoryCollectionResult> {
        let page = self.read_store.category_collection(&request.search).await?;

        Ok(CategoryCollectionResult {
            total_categories: page.total_elements(),
            categories: page.map(CategoryItem::from).content,
        })
    }
}

/// A category with the catalogs it is placed in, filtered by catalog name.
#[derive(Debug, Clone)]
pub struct GetCategoryDetail {
    pub category_id: Option<CategoryId>,
    pub search: SearchRequest,
}

impl Request for GetCategoryDetail {
    type Response = CategoryDetailResult;
    const NAME: &'static str = "GetCategoryDetail";
}

impl RequiredIds for GetCategoryDetail {
    fn check_ids(&self, failures: &mut ValidationFailures) {
        check_id(failures, "category_id", "CategoryId", self.category_id);
    }
}

pub struct GetCategoryDetailHandler {
    read_store: Arc<dyn CatalogReadStore>,
}

impl GetCategoryDetailHandler {
    #[must_use]
    pub fn new(read_store: Arc<dyn CatalogReadStore>) -> Self {
        Self { read_store }
    }
}

#[async_trait]
impl RequestHandler<GetCategoryDetail> for GetCategoryDetailHandler {
    async fn handle(&self, request: GetCategoryDetail) -> CatalogResult<CategoryDetailResult> {
        let category_id = required(request.category_id, "category_id", "CategoryId")?;

        self.read_store
            .category_detail(category_id, &request.search)
            .await?
            .map(CategoryDetailResult::from)
            .ok_or_else(|| CatalogError::not_found("Category", category_id))
    }
}
