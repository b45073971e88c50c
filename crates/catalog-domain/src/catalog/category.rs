//! Categories placed inside a catalog.

use super::CatalogProduct;
use crate::{require_name, DomainError, DomainResult};
use catalog_core::{CatalogCategoryId, CatalogId, CatalogProductId, CategoryId, ProductId};
use chrono::{DateTime, Utc};

/// A `Category` placed at some position of a catalog's tree.
///
/// The optional availability window bounds when the category is offered;
/// products listed under it keep windows of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogCategory {
    catalog_category_id: CatalogCategoryId,
    catalog_id: CatalogId,
    category_id: CategoryId,
    display_name: String,
    parent_id: Option<CatalogCategoryId>,
    available_from: Option<DateTime<Utc>>,
    available_to: Option<DateTime<Utc>>,
    products: Vec<CatalogProduct>,
}

impl CatalogCategory {
    pub(crate) fn new(
        catalog_id: CatalogId,
        category_id: CategoryId,
        display_name: impl Into<String>,
        parent_id: Option<CatalogCategoryId>,
    ) -> DomainResult<Self> {
        Ok(Self {
            catalog_category_id: CatalogCategoryId::new(),
            catalog_id,
            category_id,
            display_name: require_name("Display name", display_name)?,
            parent_id,
            available_from: None,
            available_to: None,
            products: Vec::new(),
        })
    }

    /// Rebuilds a catalog category from stored state.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        catalog_category_id: CatalogCategoryId,
        catalog_id: CatalogId,
        category_id: CategoryId,
        display_name: String,
        parent_id: Option<CatalogCategoryId>,
        available_from: Option<DateTime<Utc>>,
        available_to: Option<DateTime<Utc>>,
        products: Vec<CatalogProduct>,
    ) -> Self {
        Self {
            catalog_category_id,
            catalog_id,
            category_id,
            display_name,
            parent_id,
            available_from,
            available_to,
            products,
        }
    }

    #[must_use]
    pub const fn catalog_category_id(&self) -> CatalogCategoryId {
        self.catalog_category_id
    }

    #[must_use]
    pub const fn catalog_id(&self) -> CatalogId {
        self.catalog_id
    }

    #[must_use]
    pub const fn category_id(&self) -> CategoryId {
        self.category_id
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub const fn parent_id(&self) -> Option<CatalogCategoryId> {
        self.parent_id
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    #[must_use]
    pub const fn available_from(&self) -> Option<DateTime<Utc>> {
        self.available_from
    }

    #[must_use]
    pub const fn available_to(&self) -> Option<DateTime<Utc>> {
        self.available_to
    }

    #[must_use]
    pub fn products(&self) -> &[CatalogProduct] {
        &self.products
    }

    pub fn change_display_name(&mut self, display_name: impl Into<String>) -> DomainResult<()> {
        self.display_name = require_name("Display name", display_name)?;
        Ok(())
    }

    /// Sets the availability window. Either bound may be open.
    pub fn set_availability(
        &mut self,
        available_from: Option<DateTime<Utc>>,
        available_to: Option<DateTime<Utc>>,
    ) -> DomainResult<()> {
        if let (Some(from), Some(to)) = (available_from, available_to) {
            if from > to {
                return Err(DomainError::InvalidArgument(
                    "Available from must not be later than available to".to_string(),
                ));
            }
        }
        self.available_from = available_from;
        self.available_to = available_to;
        Ok(())
    }

    /// Returns true when `at` falls inside the window. Open bounds always match.
    #[must_use]
    pub fn is_available_at(&self, at: DateTime<Utc>) -> bool {
        self.available_from.map_or(true, |from| from <= at)
            && self.available_to.map_or(true, |to| at <= to)
    }

    /// Returns true when `product_id` is already listed here.
    #[must_use]
    pub fn has_product(&self, product_id: ProductId) -> bool {
        self.products.iter().any(|p| p.product_id() == product_id)
    }

    /// Lists a product under this category.
    pub fn create_catalog_product(
        &mut self,
        product_id: ProductId,
        display_name: impl Into<String>,
    ) -> DomainResult<&mut CatalogProduct> {
        if self.has_product(product_id) {
            return Err(DomainError::Duplicate(format!(
                "Product#{product_id} is already in CatalogCategory#{}",
                self.catalog_category_id
            )));
        }

        let product = CatalogProduct::new(self.catalog_category_id, product_id, display_name)?;
        let index = self.products.len();
        self.products.push(product);
        Ok(&mut self.products[index])
    }

    #[must_use]
    pub fn find_product(&self, catalog_product_id: CatalogProductId) -> Option<&CatalogProduct> {
        self.products
            .iter()
            .find(|p| p.catalog_product_id() == catalog_product_id)
    }

    pub fn find_product_mut(
        &mut self,
        catalog_product_id: CatalogProductId,
    ) -> Option<&mut CatalogProduct> {
        self.products
            .iter_mut()
            .find(|p| p.catalog_product_id() == catalog_product_id)
    }

    /// Removes a listed product and returns it.
    pub fn remove_catalog_product(
        &mut self,
        catalog_product_id: CatalogProductId,
    ) -> DomainResult<CatalogProduct> {
        let index = self
            .products
            .iter()
            .position(|p| p.catalog_product_id() == catalog_product_id)
            .ok_or_else(|| DomainError::not_found("CatalogProduct", catalog_product_id))?;
        Ok(self.products.remove(index))
    }
}
