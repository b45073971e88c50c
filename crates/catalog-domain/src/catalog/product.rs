//! Products listed inside a catalog category.

use crate::{require_name, DomainError, DomainResult};
use catalog_core::{CatalogCategoryId, CatalogProductId, ProductId};
use chrono::{DateTime, Utc};

/// A product as it appears under one catalog category.
///
/// Carries its own display name plus a visibility flag and an optional
/// availability window; the referenced `Product` is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogProduct {
    catalog_product_id: CatalogProductId,
    catalog_category_id: CatalogCategoryId,
    product_id: ProductId,
    display_name: String,
    is_displayed: bool,
    available_from: Option<DateTime<Utc>>,
    available_to: Option<DateTime<Utc>>,
}

impl CatalogProduct {
    pub(crate) fn new(
        catalog_category_id: CatalogCategoryId,
        product_id: ProductId,
        display_name: impl Into<String>,
    ) -> DomainResult<Self> {
        Ok(Self {
            catalog_product_id: CatalogProductId::new(),
            catalog_category_id,
            product_id,
            display_name: require_name("Display name", display_name)?,
            is_displayed: true,
            available_from: None,
            available_to: None,
        })
    }

    /// Rebuilds a catalog product from stored state.
    #[must_use]
    pub fn restore(
        catalog_product_id: CatalogProductId,
        catalog_category_id: CatalogCategoryId,
        product_id: ProductId,
        display_name: String,
        is_displayed: bool,
        available_from: Option<DateTime<Utc>>,
        available_to: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            catalog_product_id,
            catalog_category_id,
            product_id,
            display_name,
            is_displayed,
            available_from,
            available_to,
        }
    }

    #[must_use]
    pub const fn catalog_product_id(&self) -> CatalogProductId {
        self.catalog_product_id
    }

    #[must_use]
    pub const fn catalog_category_id(&self) -> CatalogCategoryId {
        self.catalog_category_id
    }

    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product_id
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub const fn is_displayed(&self) -> bool {
        self.is_displayed
    }

    #[must_use]
    pub const fn available_from(&self) -> Option<DateTime<Utc>> {
        self.available_from
    }

    #[must_use]
    pub const fn available_to(&self) -> Option<DateTime<Utc>> {
        self.available_to
    }

    pub fn change_display_name(&mut self, display_name: impl Into<String>) -> DomainResult<()> {
        self.display_name = require_name("Display name", display_name)?;
        Ok(())
    }

    pub fn set_displayed(&mut self, is_displayed: bool) {
        self.is_displayed = is_displayed;
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

    /// Returns true when the product is displayed and inside its window.
    #[must_use]
    pub fn is_available_at(&self, at: DateTime<Utc>) -> bool {
        self.is_displayed
            && self.available_from.map_or(true, |from| from <= at)
            && self.available_to.map_or(true, |to| at <= to)
    }
}
