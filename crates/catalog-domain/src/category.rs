//! Category aggregate.

use crate::{require_name, DomainResult};
use catalog_core::{AggregateRoot, CategoryId};

/// A reusable category that catalogs place into their trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    category_id: CategoryId,
    display_name: String,
}

impl Category {
    /// Creates a new category.
    pub fn create(display_name: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            category_id: CategoryId::new(),
            display_name: require_name("Display name", display_name)?,
        })
    }

    /// Rebuilds a category from stored state.
    #[must_use]
    pub fn restore(category_id: CategoryId, display_name: String) -> Self {
        Self {
            category_id,
            display_name,
        }
    }

    #[must_use]
    pub const fn category_id(&self) -> CategoryId {
        self.category_id
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn change_display_name(&mut self, display_name: impl Into<String>) -> DomainResult<()> {
        self.display_name = require_name("Display name", display_name)?;
        Ok(())
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;
    const NAME: &'static str = "Category";

    fn id(&self) -> CategoryId {
        self.category_id
    }
}
