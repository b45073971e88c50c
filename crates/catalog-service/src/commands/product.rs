use crate::checks::{check_id, not_found_message, required};
use crate::dto::ProductCreated;
use async_trait::async_trait;
use catalog_core::rules::not_blank;
use catalog_core::{
    CatalogError, CatalogResult, ProductId, Request, RequestHandler,
    ValidationFailures, Validator,
};
use catalog_domain::Product;
use catalog_repository::ProductRepository;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

#[derive(Debug, Clone, Validate)]
pub struct CreateProduct {
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "Value must be at most 255 characters.")
    )]
    pub product_name: String,
}

impl Request for CreateProduct {
    type Response = ProductCreated;
    const NAME: &'static str = "CreateProduct";
}

pub struct CreateProductHandler {
    products: Arc<dyn ProductRepository>,
}

impl CreateProductHandler {
    #[must_use]
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl RequestHandler<CreateProduct> for CreateProductHandler {
    async fn handle(&self, request: CreateProduct) -> CatalogResult<ProductCreated> {
        let product = Product::create(request.product_name)?;
        self.products.add(&product).await?;

        info!("Product created: {}", product.product_id());
        Ok(ProductCreated {
            product_id: product.product_id(),
        })
    }
}

#[derive(Debug, Clone, Validate)]
pub struct UpdateProduct {
    pub product_id: Option<ProductId>,
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "Value must be at most 255 characters.")
    )]
    pub product_name: String,
}

impl Request for UpdateProduct {
    type Response = ();
    const NAME: &'static str = "UpdateProduct";
}

#[derive(Debug, Clone, Copy)]
pub struct RemoveProduct {
    pub product_id: Option<ProductId>,
}

impl Request for RemoveProduct {
    type Response = ();
    const NAME: &'static str = "RemoveProduct";
}

pub struct ProductExistsValidator {
    products: Arc<dyn ProductRepository>,
}

impl ProductExistsValidator {
    #[must_use]
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    async fn check(&self, product_id: Option<ProductId>) -> CatalogResult<ValidationFailures> {
        let mut failures = ValidationFailures::new();
        if let Some(product_id) = check_id(&mut failures, "product_id", "ProductId", product_id) {
            if !self.products.exists(product_id).await? {
                failures.add("product_id", not_found_message("Product", product_id));
            }
        }
        Ok(failures)
    }
}

#[async_trait]
impl Validator<UpdateProduct> for ProductExistsValidator {
    async fn validate(&self, request: &UpdateProduct) -> CatalogResult<ValidationFailures> {
        self.check(request.product_id).await
    }
}

#[async_trait]
impl Validator<RemoveProduct> for ProductExistsValidator {
    async fn validate(&self, request: &RemoveProduct) -> CatalogResult<ValidationFailures> {
        self.check(request.product_id).await
    }
}

pub struct UpdateProductHandler {
    products: Arc<dyn ProductRepository>,
}

impl UpdateProductHandler {
    #[must_use]
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl RequestHandler<UpdateProduct> for UpdateProductHandler {
    async fn handle(&self, request: UpdateProduct) -> CatalogResult<()> {
        let product_id = required(request.product_id, "product_id", "ProductId")?;
        let mut product = self
            .products
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Product", product_id))?;

        product.change_name(request.product_name)?;
        self.products.update(&product).await?;

        info!("Product updated: {}", product_id);
        Ok(())
    }
}

pub struct RemoveProductHandler {
    products: Arc<dyn ProductRepository>,
}

impl RemoveProductHandler {
    #[must_use]
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl RequestHandler<RemoveProduct> for RemoveProductHandler {
    async fn handle(&self, request: RemoveProduct) -> CatalogResult<()> {
        let product_id = required(request.product_id, "product_id", "ProductId")?;
        if !self.products.remove(product_id).await? {
            return Err(CatalogError::not_found("Product", product_id));
        }

        info!("Product removed: {}", product_id);
        Ok(())
    }
}
