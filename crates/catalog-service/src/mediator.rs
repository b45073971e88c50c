//! Wiring of every command and query into a [`Mediator`].

use crate::checks::{FieldRulesValidator, RequiredIdsValidator};
use crate::commands::{
    CatalogCategoryExistsValidator, CreateCatalog, CreateCatalogCategory, CreateCatalogProduct,
    CreateCategory, CreateProduct, RemoveCatalog, RemoveCatalogCategory, RemoveCatalogProduct,
    RemoveCategory, RemoveProduct, UpdateCatalog, UpdateCatalogCategory, UpdateCatalogProduct,
    UpdateCategory, UpdateProduct, CatalogExistsValidator, CatalogProductValidator,
    CategoryExistsValidator, CreateCatalogCategoryHandler, CreateCatalogCategoryValidator,
    CreateCatalogHandler, CreateCatalogProductHandler, CreateCatalogProductValidator,
    CreateCatalogValidator, CreateCategoryHandler, CreateProductHandler, ProductExistsValidator,
    RemoveCatalogCategoryHandler, RemoveCatalogHandler, RemoveCatalogProductHandler,
    RemoveCategoryHandler, RemoveProductHandler, UpdateCatalogCategoryHandler,
    UpdateCatalogHandler, UpdateCatalogProductHandler, UpdateCategoryHandler,
    UpdateProductHandler,
};
use crate::queries::{
    GetCatalogCategoryDetail, GetCatalogCollection, GetCatalogDetail, GetCatalogProductDetail,
    GetCategoryCollection, GetCategoryDetail, GetProductCollection, GetProductDetail,
    GetCatalogCategoryDetailHandler, GetCatalogCollectionHandler, GetCatalogDetailHandler,
    GetCatalogProductDetailHandler, GetCategoryCollectionHandler, GetCategoryDetailHandler,
    GetProductCollectionHandler, GetProductDetailHandler,
};
use catalog_core::{Mediator, Request, Validator};
use catalog_repository::{
    CatalogReadStore, CatalogRepository, CategoryRepository, ProductRepository,
};
use std::sync::Arc;
use tracing::info;

/// Write-side repositories used by the command handlers.
#[derive(Clone)]
pub struct Repositories {
    pub catalogs: Arc<dyn CatalogRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub products: Arc<dyn ProductRepository>,
}

fn validators<R: Request>(list: Vec<Arc<dyn Validator<R>>>) -> Vec<Arc<dyn Validator<R>>> {
    list
}

/// Builds the mediator with every handler registered behind its validators.
///
/// Commands carrying names run the derived field rules first, then their
/// own validator. Detail queries only check that their ids are present.
#[must_use]
pub fn build_mediator(
    repositories: &Repositories,
    read_store: &Arc<dyn CatalogReadStore>,
) -> Mediator {
    let Repositories {
        catalogs,
        categories,
        products,
    } = repositories;

    let catalog_exists = Arc::new(CatalogExistsValidator::new(catalogs.clone()));
    let catalog_category_exists = Arc::new(CatalogCategoryExistsValidator::new(catalogs.clone()));
    let catalog_product_exists = Arc::new(CatalogProductValidator::new(catalogs.clone()));
    let category_exists = Arc::new(CategoryExistsValidator::new(categories.clone()));
    let product_exists = Arc::new(ProductExistsValidator::new(products.clone()));

    let mediator = Mediator::builder()
        // Catalogs
        .register_with_validators(
            CreateCatalogHandler::new(catalogs.clone()),
            validators::<CreateCatalog>(vec![
                Arc::new(FieldRulesValidator::new()),
                Arc::new(CreateCatalogValidator::new(categories.clone())),
            ]),
        )
        .register_with_validators(
            UpdateCatalogHandler::new(catalogs.clone()),
            validators::<UpdateCatalog>(vec![
                Arc::new(FieldRulesValidator::new()),
                catalog_exists.clone(),
            ]),
        )
        .register_with_validators(
            RemoveCatalogHandler::new(catalogs.clone()),
            validators::<RemoveCatalog>(vec![catalog_exists]),
        )
        // Catalog categories
        .register_with_validators(
            CreateCatalogCategoryHandler::new(catalogs.clone()),
            validators::<CreateCatalogCategory>(vec![
                Arc::new(FieldRulesValidator::new()),
                Arc::new(CreateCatalogCategoryValidator::new(
                    catalogs.clone(),
                    categories.clone(),
                )),
            ]),
        )
        .register_with_validators(
            UpdateCatalogCategoryHandler::new(catalogs.clone()),
            validators::<UpdateCatalogCategory>(vec![
                Arc::new(FieldRulesValidator::new()),
                catalog_category_exists.clone(),
            ]),
        )
        .register_with_validators(
            RemoveCatalogCategoryHandler::new(catalogs.clone()),
            validators::<RemoveCatalogCategory>(vec![catalog_category_exists]),
        )
        // Catalog products
        .register_with_validators(
            CreateCatalogProductHandler::new(catalogs.clone()),
            validators::<CreateCatalogProduct>(vec![
                Arc::new(FieldRulesValidator::new()),
                Arc::new(CreateCatalogProductValidator::new(
                    catalogs.clone(),
                    products.clone(),
                )),
            ]),
        )
        .register_with_validators(
            UpdateCatalogProductHandler::new(catalogs.clone()),
            validators::<UpdateCatalogProduct>(vec![
                Arc::new(FieldRulesValidator::new()),
                catalog_product_exists.clone(),
            ]),
        )
        .register_with_validators(
            RemoveCatalogProductHandler::new(catalogs.clone()),
            validators::<RemoveCatalogProduct>(vec![catalog_product_exists]),
        )
        // Categories
        .register_with_validators(
            CreateCategoryHandler::new(categories.clone()),
            validators::<CreateCategory>(vec![Arc::new(FieldRulesValidator::new())]),
        )
        .register_with_validators(
            UpdateCategoryHandler::new(categories.clone()),
            validators::<UpdateCategory>(vec![
                Arc::new(FieldRulesValidator::new()),
                category_exists.clone(),
            ]),
        )
        .register_with_validators(
            RemoveCategoryHandler::new(categories.clone()),
            validators::<RemoveCategory>(vec![category_exists]),
        )
        // Products
        .register_with_validators(
            CreateProductHandler::new(products.clone()),
            validators::<CreateProduct>(vec![Arc::new(FieldRulesValidator::new())]),
        )
        .register_with_validators(
            UpdateProductHandler::new(products.clone()),
            validators::<UpdateProduct>(vec![
                Arc::new(FieldRulesValidator::new()),
                product_exists.clone(),
            ]),
        )
        .register_with_validators(
            RemoveProductHandler::new(products.clone()),
            validators::<RemoveProduct>(vec![product_exists]),
        )
        // Queries
        .register::<GetCatalogCollection, _>(GetCatalogCollectionHandler::new(read_store.clone()))
        .register_validated(
            GetCatalogDetailHandler::new(read_store.clone()),
            RequiredIdsValidator::<GetCatalogDetail>::new(),
        )
        .register_validated(
            GetCatalogCategoryDetailHandler::new(read_store.clone()),
            RequiredIdsValidator::<GetCatalogCategoryDetail>::new(),
        )
        .register_validated(
            GetCatalogProductDetailHandler::new(read_store.clone()),
            RequiredIdsValidator::<GetCatalogProductDetail>::new(),
        )
        .register::<GetCategoryCollection, _>(GetCategoryCollectionHandler::new(read_store.clone()))
        .register_validated(
            GetCategoryDetailHandler::new(read_store.clone()),
            RequiredIdsValidator::<GetCategoryDetail>::new(),
        )
        .register::<GetProductCollection, _>(GetProductCollectionHandler::new(read_store.clone()))
        .register_validated(
            GetProductDetailHandler::new(read_store.clone()),
            RequiredIdsValidator::<GetProductDetail>::new(),
        )
        .build();

    info!("Mediator ready with all catalog commands and queries");
    mediator
}
