use crate::checks::{check_id, required, RequiredIds};
use crate::dto::{ProductCollectionResult, ProductDetailResult, ProductItem};
use async_trait::async_trait;
use catalog_core::{
    CatalogError, CatalogResult, ProductId, Request, RequestHandler, SearchRequest,
    ValidationFailures,
};
use catalog_repository::CatalogReadStore;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct GetProductCollection {
    pub search: SearchRequest,
}

impl Request for GetProductCollection {
    type Response = ProductCollectionResult;
    const NAME: &'static str = "GetProductCollection";
}

pub struct GetProductCollectionHandler {
    read_store: Arc<dyn CatalogReadStore>,
}

impl GetProductCollectionHandler {
    #[must_use]
    pub fn new(read_store: Arc<dyn CatalogReadStore>) -> Self {
        Self { read_store }
    }
}

#[async_trait]
impl RequestHandler<GetProductCollection> for GetProductCollectionHandler {
    async fn handle(&self, request: GetProductCollection) -> CatalogResult<ProductCollectionResult> {
        let page = self.read_store.product_collection(&request.search).await?;

        Ok(ProductCollectionResult {
            total_products: page.total_elements(),
            products: page.map(ProductItem::from).content,
        })
    }
}

/// A product with the catalog categories listing it, filtered by the
/// catalog category name.
#[derive(Debug, Clone)]
pub struct GetProductDetail {
    pub product_id: Option<ProductId>,
    pub search: SearchRequest,
}

impl Request for GetProductDetail {
    type Response = ProductDetailResult;
    const NAME: &'static str = "GetProductDetail";
}

impl RequiredIds for GetProductDetail {
    fn check_ids(&self, failures: &mut ValidationFailures) {
        check_id(failures, "product_id", "ProductId", self.product_id);
    }
}

pub struct GetProductDetailHandler {
    read_store: Arc<dyn CatalogReadStore>,
}

impl GetProductDetailHandler {
    #[must_use]
    pub fn new(read_store: Arc<dyn CatalogReadStore>) -> Self {
        Self { read_store }
    }
}

#[async_trait]
impl RequestHandler<GetProductDetail> for GetProductDetailHandler {
    async fn handle(&self, request: GetProductDetail) -> CatalogResult<ProductDetailResult> {
        let product_id = required(request.product_id, "product_id", "ProductId")?;

        self.read_store
            .product_detail(product_id, &request.search)
            .await?
            .map(ProductDetailResult::from)
            .ok_or_else(|| CatalogError::not_found("Product", product_id))
    }
}
