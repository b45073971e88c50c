//! Commands: requests that change state.
//!
//! Every command comes with a validator that checks identifiers and the
//! existence of referenced aggregates, and a handler that loads the
//! aggregate, applies the change and persists it once.

mod catalog;
mod catalog_category;
mod catalog_product;
mod category;
mod product;

pub use catalog::*;
pub use catalog_category::*;
pub use catalog_product::*;
pub use category::*;
pub use product::*;

use crate::checks::{check_id, not_found_message};
use catalog_core::{CatalogError, CatalogId, CatalogResult, ValidationFailures};
use catalog_domain::Catalog;
use catalog_repository::CatalogRepository;

/// Loads a catalog for a handler.
async fn load_catalog(catalogs: &dyn CatalogRepository, catalog_id: CatalogId) -> CatalogResult<Catalog> {
    catalogs
        .find_by_id(catalog_id)
        .await?
        .ok_or_else(|| CatalogError::not_found("Catalog", catalog_id))
}

/// Loads a catalog for a validator, recording a failure on `catalog_id`
/// when it does not exist.
async fn find_catalog(
    catalogs: &dyn CatalogRepository,
    failures: &mut ValidationFailures,
    catalog_id: CatalogId,
) -> CatalogResult<Option<Catalog>> {
    let catalog = catalogs.find_by_id(catalog_id).await?;
    if catalog.is_none() {
        failures.add("catalog_id", not_found_message("Catalog", catalog_id));
    }
    Ok(catalog)
}

/// Checks the `catalog_id` of a nested command and loads the catalog.
async fn check_catalog(
    catalogs: &dyn CatalogRepository,
    failures: &mut ValidationFailures,
    catalog_id: Option<CatalogId>,
) -> CatalogResult<Option<Catalog>> {
    match check_id(failures, "catalog_id", "CatalogId", catalog_id) {
        Some(catalog_id) => find_catalog(catalogs, failures, catalog_id).await,
        None => Ok(None),
    }
}
