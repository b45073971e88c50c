//! Product aggregate.

use crate::{require_name, DomainResult};
use catalog_core::{AggregateRoot, ProductId};

/// A product that catalog categories can list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    product_id: ProductId,
    name: String,
}

impl Product {
    /// Creates a new product.
    pub fn create(name: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            product_id: ProductId::new(),
            name: require_name("Product name", name)?,
        })
    }

    /// Rebuilds a product from stored state.
    #[must_use]
    pub fn restore(product_id: ProductId, name: String) -> Self {
        Self { product_id, name }
    }

    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.name = require_name("Product name", name)?;
        Ok(())
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;
    const NAME: &'static str = "Product";

    fn id(&self) -> ProductId {
        self.product_id
    }
}
