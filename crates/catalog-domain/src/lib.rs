//! # Catalog Domain
//!
//! Aggregates of the product catalog.
//!
//! ```text
//! Catalog (root)
//!   └─ CatalogCategory   (tree: parent_id points at another CatalogCategory)
//!        └─ CatalogProduct
//! Category (root)         Product (root)
//! ```
//!
//! `Catalog` owns its categories and their products; they are only created,
//! changed and removed through the catalog so its invariants always hold.
//! `Category` and `Product` are independent aggregates referenced by id.

pub mod catalog;
pub mod category;
pub mod error;
pub mod product;

pub use catalog::{Catalog, CatalogCategory, CatalogProduct};
pub use category::Category;
pub use error::{DomainError, DomainResult};
pub use product::Product;

/// Maximum length of any display name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Trims a name and checks it is present and not too long.
pub(crate) fn require_name(field: &'static str, value: impl Into<String>) -> DomainResult<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidArgument(format!("{field} is required")));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::InvalidArgument(format!(
            "{field} must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}
