//! Commands on the products listed under a catalog category.

use super::{check_catalog, load_catalog};
use crate::checks::{check_id, check_window, not_found_message, required};
use crate::dto::CatalogProductCreated;
use async_trait::async_trait;
use catalog_core::rules::not_blank;
use catalog_core::{
    CatalogCategoryId, CatalogError, CatalogId, CatalogProductId, CatalogResult, ProductId,
    Request, RequestHandler, ValidationFailures, Validator,
};
use catalog_domain::{Catalog, CatalogCategory};
use catalog_repository::{CatalogRepository, ProductRepository};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

/// Lists a product under a catalog category.
#[derive(Debug, Clone, Validate)]
pub struct CreateCatalogProduct {
    pub catalog_id: Option<CatalogId>,
    pub catalog_category_id: Option<CatalogCategoryId>,
    pub product_id: Option<ProductId>,
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "Value must be at most 255 characters.")
    )]
    pub display_name: String,
}

impl Request for CreateCatalogProduct {
    type Response = CatalogProductCreated;
    const NAME: &'static str = "CreateCatalogProduct";
}

/// Changes how a listed product is shown.
#[derive(Debug, Clone, Validate)]
pub struct UpdateCatalogProduct {
    pub catalog_id: Option<CatalogId>,
    pub catalog_category_id: Option<CatalogCategoryId>,
    pub catalog_product_id: Option<CatalogProductId>,
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "Value must be at most 255 characters.")
    )]
    pub display_name: String,
    pub is_displayed: bool,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
}

impl Request for UpdateCatalogProduct {
    type Response = ();
    const NAME: &'static str = "UpdateCatalogProduct";
}

#[derive(Debug, Clone, Copy)]
pub struct RemoveCatalogProduct {
    pub catalog_id: Option<CatalogId>,
    pub catalog_category_id: Option<CatalogCategoryId>,
    pub catalog_product_id: Option<CatalogProductId>,
}

impl Request for RemoveCatalogProduct {
    type Response = ();
    const NAME: &'static str = "RemoveCatalogProduct";
}

/// Finds the catalog category inside an already loaded catalog, recording a
/// failure on `catalog_category_id` when it is not there.
fn check_catalog_category<'a>(
    failures: &mut ValidationFailures,
    catalog: Option<&'a Catalog>,
    catalog_category_id: Option<CatalogCategoryId>,
) -> Option<&'a CatalogCategory> {
    let catalog_category_id = check_id(
        failures,
        "catalog_category_id",
        "CatalogCategoryId",
        catalog_category_id,
    )?;
    let catalog = catalog?;
    let category = catalog.find_category(catalog_category_id);
    if category.is_none() {
        failures.add(
            "catalog_category_id",
            format!(
                "CatalogCategory#{catalog_category_id} could not be found in Catalog#{}.",
                catalog.catalog_id()
            ),
        );
    }
    category
}

pub struct CreateCatalogProductValidator {
    catalogs: Arc<dyn CatalogRepository>,
    products: Arc<dyn ProductRepository>,
}

impl CreateCatalogProductValidator {
    #[must_use]
    pub fn new(catalogs: Arc<dyn CatalogRepository>, products: Arc<dyn ProductRepository>) -> Self {
        Self { catalogs, products }
    }
}

#[async_trait]
impl Validator<CreateCatalogProduct> for CreateCatalogProductValidator {
    async fn validate(&self, request: &CreateCatalogProduct) -> CatalogResult<ValidationFailures> {
        let mut failures = ValidationFailures::new();
        let catalog =
            check_catalog(self.catalogs.as_ref(), &mut failures, request.catalog_id).await?;
        let category =
            check_catalog_category(&mut failures, catalog.as_ref(), request.catalog_category_id);

        if let Some(product_id) =
            check_id(&mut failures, "product_id", "ProductId", request.product_id)
        {
            if !self.products.exists(product_id).await? {
                failures.add("product_id", not_found_message("Product", product_id));
            } else if let Some(category) = category {
                if category.has_product(product_id) {
                    failures.add(
                        "product_id",
                        format!(
                            "Product#{product_id} is already in CatalogCategory#{}.",
                            category.catalog_category_id()
                        ),
                    );
                }
            }
        }

        Ok(failures)
    }
}

pub struct CreateCatalogProductHandler {
    catalogs: Arc<dyn CatalogRepository>,
}

impl CreateCatalogProductHandler {
    #[must_use]
    pub fn new(catalogs: Arc<dyn CatalogRepository>) -> Self {
        Self { catalogs }
    }
}

#[async_trait]
impl RequestHandler<CreateCatalogProduct> for CreateCatalogProductHandler {
    async fn handle(&self, request: CreateCatalogProduct) -> CatalogResult<CatalogProductCreated> {
        let catalog_id = required(request.catalog_id, "catalog_id", "CatalogId")?;
        let catalog_category_id = required(
            request.catalog_category_id,
            "catalog_category_id",
            "CatalogCategoryId",
        )?;
        let product_id = required(request.product_id, "product_id", "ProductId")?;
        let mut catalog = load_catalog(self.catalogs.as_ref(), catalog_id).await?;

        let catalog_product_id = catalog
            .find_category_mut(catalog_category_id)
            .ok_or_else(|| CatalogError::not_found("CatalogCategory", catalog_category_id))?
            .create_catalog_product(product_id, request.display_name)?
            .catalog_product_id();
        self.catalogs.update(&catalog).await?;

        info!(
            "Product {} listed under catalog category {} as {}",
            product_id, catalog_category_id, catalog_product_id
        );
        Ok(CatalogProductCreated { catalog_product_id })
    }
}

/// Checks that a listed product exists. For updates it also checks the
/// availability window.
pub struct CatalogProductValidator {
    catalogs: Arc<dyn CatalogRepository>,
}

impl CatalogProductValidator {
    #[must_use]
    pub fn new(catalogs: Arc<dyn CatalogRepository>) -> Self {
        Self { catalogs }
    }

    async fn check(
        &self,
        failures: &mut ValidationFailures,
        catalog_id: Option<CatalogId>,
        catalog_category_id: Option<CatalogCategoryId>,
        catalog_product_id: Option<CatalogProductId>,
    ) -> CatalogResult<()> {
        let catalog = check_catalog(self.catalogs.as_ref(), failures, catalog_id).await?;
        let category = check_catalog_category(failures, catalog.as_ref(), catalog_category_id);

        if let (Some(category), Some(catalog_product_id)) = (
            category,
            check_id(
                failures,
                "catalog_product_id",
                "CatalogProductId",
                catalog_product_id,
            ),
        ) {
            if category.find_product(catalog_product_id).is_none() {
                failures.add(
                    "catalog_product_id",
                    format!(
                        "CatalogProduct#{catalog_product_id} could not be found in CatalogCategory#{}.",
                        category.catalog_category_id()
                    ),
                );
            }
        }

        Ok(())
    }
}

#[async_trait]
impl Validator<UpdateCatalogProduct> for CatalogProductValidator {
    async fn validate(&self, request: &UpdateCatalogProduct) -> CatalogResult<ValidationFailures> {
        let mut failures = ValidationFailures::new();
        self.check(
            &mut failures,
            request.catalog_id,
            request.catalog_category_id,
            request.catalog_product_id,
        )
        .await?;

        check_window(&mut failures, request.available_from, request.available_to);

        Ok(failures)
    }
}

#[async_trait]
impl Validator<RemoveCatalogProduct> for CatalogProductValidator {
    async fn validate(&self, request: &RemoveCatalogProduct) -> CatalogResult<ValidationFailures> {
        let mut failures = ValidationFailures::new();
        self.check(
            &mut failures,
            request.catalog_id,
            request.catalog_category_id,
            request.catalog_product_id,
        )
        .await?;
        Ok(failures)
    }
}

pub struct UpdateCatalogProductHandler {
    catalogs: Arc<dyn CatalogRepository>,
}

impl UpdateCatalogProductHandler {
    #[must_use]
    pub fn new(catalogs: Arc<dyn CatalogRepository>) -> Self {
        Self { catalogs }
    }
}

#[async_trait]
impl RequestHandler<UpdateCatalogProduct> for UpdateCatalogProductHandler {
    async fn handle(&self, request: UpdateCatalogProduct) -> CatalogResult<()> {
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
        let mut catalog = load_catalog(self.catalogs.as_ref(), catalog_id).await?;

        let product = catalog
            .find_category_mut(catalog_category_id)
            .ok_or_else(|| CatalogError::not_found("CatalogCategory", catalog_category_id))?
            .find_product_mut(catalog_product_id)
            .ok_or_else(|| CatalogError::not_found("CatalogProduct", catalog_product_id))?;
        product.change_display_name(request.display_name)?;
        product.set_displayed(request.is_displayed);
        product.set_availability(request.available_from, request.available_to)?;
        self.catalogs.update(&catalog).await?;

        info!("Catalog product updated: {}", catalog_product_id);
        Ok(())
    }
}

pub struct RemoveCatalogProductHandler {
    catalogs: Arc<dyn CatalogRepository>,
}

impl RemoveCatalogProductHandler {
    #[must_use]
    pub fn new(catalogs: Arc<dyn CatalogRepository>) -> Self {
        Self { catalogs }
    }
}

#[async_trait]
impl RequestHandler<RemoveCatalogProduct> for RemoveCatalogProductHandler {
    async fn handle(&self, request: RemoveCatalogProduct) -> CatalogResult<()> {
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
        let mut catalog = load_catalog(self.catalogs.as_ref(), catalog_id).await?;

        catalog
            .find_category_mut(catalog_category_id)
            .ok_or_else(|| CatalogError::not_found("CatalogCategory", catalog_category_id))?
            .remove_catalog_product(catalog_product_id)?;
        self.catalogs.update(&catalog).await?;

        info!("Catalog product removed: {}", catalog_product_id);
        Ok(())
    }
}
