//! Catalog aggregate.

mod category;
mod product;

pub use category::CatalogCategory;
pub use product::CatalogProduct;

use crate::{require_name, DomainError, DomainResult};
use catalog_core::{AggregateRoot, CatalogCategoryId, CatalogId, CategoryId};
use std::collections::{HashSet, VecDeque};

/// A catalog and the category tree it owns.
///
/// Invariants:
/// - a `Category` appears at most once per catalog;
/// - a parent is always another category of the same catalog;
/// - parents precede their children in [`Catalog::categories`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    catalog_id: CatalogId,
    display_name: String,
    categories: Vec<CatalogCategory>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn create(display_name: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            catalog_id: CatalogId::new(),
            display_name: require_name("Display name", display_name)?,
            categories: Vec::new(),
        })
    }

    /// Rebuilds a catalog from stored state. `categories` must list parents
    /// before their children.
    #[must_use]
    pub fn restore(
        catalog_id: CatalogId,
        display_name: String,
        categories: Vec<CatalogCategory>,
    ) -> Self {
        Self {
            catalog_id,
            display_name,
            categories,
        }
    }

    #[must_use]
    pub const fn catalog_id(&self) -> CatalogId {
        self.catalog_id
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn categories(&self) -> &[CatalogCategory] {
        &self.categories
    }

    pub fn change_display_name(&mut self, display_name: impl Into<String>) -> DomainResult<()> {
        self.display_name = require_name("Display name", display_name)?;
        Ok(())
    }

    /// Returns true when `category_id` is already placed in this catalog.
    #[must_use]
    pub fn has_category(&self, category_id: CategoryId) -> bool {
        self.categories.iter().any(|c| c.category_id() == category_id)
    }

    /// Places a category in the catalog, under `parent` when given.
    pub fn add_category(
        &mut self,
        category_id: CategoryId,
        display_name: impl Into<String>,
        parent: Option<CatalogCategoryId>,
    ) -> DomainResult<&mut CatalogCategory> {
        if self.has_category(category_id) {
            return Err(DomainError::Duplicate(format!(
                "Category#{category_id} is already in Catalog#{}",
                self.catalog_id
            )));
        }
        if let Some(parent_id) = parent {
            if self.find_category(parent_id).is_none() {
                return Err(DomainError::not_found("CatalogCategory", parent_id));
            }
        }

        let category = CatalogCategory::new(self.catalog_id, category_id, display_name, parent)?;
        let index = self.categories.len();
        self.categories.push(category);
        Ok(&mut self.categories[index])
    }

    #[must_use]
    pub fn find_category(&self, catalog_category_id: CatalogCategoryId) -> Option<&CatalogCategory> {
        self.categories
            .iter()
            .find(|c| c.catalog_category_id() == catalog_category_id)
    }

    pub fn find_category_mut(
        &mut self,
        catalog_category_id: CatalogCategoryId,
    ) -> Option<&mut CatalogCategory> {
        self.categories
            .iter_mut()
            .find(|c| c.catalog_category_id() == catalog_category_id)
    }

    /// Categories sitting at the top of the tree.
    pub fn roots(&self) -> impl Iterator<Item = &CatalogCategory> {
        self.categories.iter().filter(|c| c.is_root())
    }

    /// Direct children of a category.
    pub fn children_of(
        &self,
        catalog_category_id: CatalogCategoryId,
    ) -> impl Iterator<Item = &CatalogCategory> {
        self.categories
            .iter()
            .filter(move |c| c.parent_id() == Some(catalog_category_id))
    }

    /// Every transitive child of a category, breadth first.
    #[must_use]
    pub fn descendants_of(&self, catalog_category_id: CatalogCategoryId) -> Vec<CatalogCategoryId> {
        let mut descendants = Vec::new();
        let mut queue = VecDeque::from([catalog_category_id]);

        while let Some(current) = queue.pop_front() {
            for child in self.children_of(current) {
                let child_id = child.catalog_category_id();
                descendants.push(child_id);
                queue.push_back(child_id);
            }
        }

        descendants
    }

    /// Removes a category together with its whole subtree.
    ///
    /// Returns the removed ids, the requested category first.
    pub fn remove_category_with_descendants(
        &mut self,
        catalog_category_id: CatalogCategoryId,
    ) -> DomainResult<Vec<CatalogCategoryId>> {
        if self.find_category(catalog_category_id).is_none() {
            return Err(DomainError::not_found("CatalogCategory", catalog_category_id));
        }

        let mut removed = vec![catalog_category_id];
        removed.extend(self.descendants_of(catalog_category_id));

        let doomed: HashSet<_> = removed.iter().copied().collect();
        self.categories
            .retain(|c| !doomed.contains(&c.catalog_category_id()));

        Ok(removed)
    }

    /// Number of products listed across every category.
    #[must_use]
    pub fn total_products(&self) -> usize {
        self.categories.iter().map(|c| c.products().len()).sum()
    }
}

impl AggregateRoot for Catalog {
    type Id = CatalogId;
    const NAME: &'static str = "Catalog";

    fn id(&self) -> CatalogId {
        self.catalog_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::ProductId;

    fn catalog() -> Catalog {
        Catalog::create("Spring 2026").unwrap()
    }

    #[test]
    fn test_create_catalog() {
        let catalog = catalog();
        assert_eq!(catalog.display_name(), "Spring 2026");
        assert!(catalog.categories().is_empty());
        assert!(Catalog::create(" ").is_err());
    }

    #[test]
    fn test_add_root_category() {
        let mut catalog = catalog();
        let category_id = CategoryId::new();

        let added = catalog.add_category(category_id, "Shoes", None).unwrap();
        assert_eq!(added.category_id(), category_id);
        assert!(added.is_root());
        let added_id = added.catalog_category_id();

        assert_eq!(catalog.categories().len(), 1);
        assert_eq!(catalog.find_category(added_id).unwrap().catalog_id(), catalog.catalog_id());
        assert!(catalog.has_category(category_id));
    }

    #[test]
    fn test_duplicate_category_is_rejected() {
        let mut catalog = catalog();
        let category_id = CategoryId::new();
        catalog.add_category(category_id, "Shoes", None).unwrap();

        let err = catalog.add_category(category_id, "Shoes again", None).unwrap_err();
        assert!(matches!(err, DomainError::Duplicate(_)));
        assert_eq!(catalog.categories().len(), 1);
    }

    #[test]
    fn test_parent_must_belong_to_catalog() {
        let mut catalog = catalog();
        let mut other = Catalog::create("Other").unwrap();
        let foreign_parent = other
            .add_category(CategoryId::new(), "Foreign", None)
            .unwrap()
            .catalog_category_id();

        let err = catalog
            .add_category(CategoryId::new(), "Orphan", Some(foreign_parent))
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(catalog.categories().is_empty());
    }

    #[test]
    fn test_category_tree_navigation() {
        let mut catalog = catalog();
        let shoes = catalog
            .add_category(CategoryId::new(), "Shoes", None)
            .unwrap()
            .catalog_category_id();
        let running = catalog
            .add_category(CategoryId::new(), "Running", Some(shoes))
            .unwrap()
            .catalog_category_id();
        let trail = catalog
            .add_category(CategoryId::new(), "Trail", Some(running))
            .unwrap()
            .catalog_category_id();
        catalog.add_category(CategoryId::new(), "Bags", None).unwrap();

        assert_eq!(catalog.roots().count(), 2);
        assert_eq!(catalog.children_of(shoes).count(), 1);
        assert_eq!(catalog.descendants_of(shoes), vec![running, trail]);
        assert!(catalog.descendants_of(trail).is_empty());
    }

    #[test]
    fn test_remove_category_with_descendants() {
        let mut catalog = catalog();
        let shoes = catalog
            .add_category(CategoryId::new(), "Shoes", None)
            .unwrap()
            .catalog_category_id();
        let running = catalog
            .add_category(CategoryId::new(), "Running", Some(shoes))
            .unwrap()
            .catalog_category_id();
        let trail = catalog
            .add_category(CategoryId::new(), "Trail", Some(running))
            .unwrap()
            .catalog_category_id();
        let bags = catalog
            .add_category(CategoryId::new(), "Bags", None)
            .unwrap()
            .catalog_category_id();

        let removed = catalog.remove_category_with_descendants(shoes).unwrap();
        assert_eq!(removed, vec![shoes, running, trail]);
        assert_eq!(catalog.categories().len(), 1);
        assert!(catalog.find_category(bags).is_some());
        assert!(catalog.find_category(trail).is_none());
    }

    #[test]
    fn test_remove_unknown_category_fails() {
        let mut catalog = catalog();
        let err = catalog
            .remove_category_with_descendants(CatalogCategoryId::new())
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[test]
    fn test_products_are_managed_through_categories() {
        let mut catalog = catalog();
        let category = catalog.add_category(CategoryId::new(), "Shoes", None).unwrap();
        category.create_catalog_product(ProductId::new(), "Runner").unwrap();
        category.create_catalog_product(ProductId::new(), "Walker").unwrap();

        assert_eq!(catalog.total_products(), 2);
    }

    #[test]
    fn test_removed_category_can_be_added_again() {
        let mut catalog = catalog();
        let category_id = CategoryId::new();
        let placed = catalog
            .add_category(category_id, "Shoes", None)
            .unwrap()
            .catalog_category_id();
        catalog.remove_category_with_descendants(placed).unwrap();

        assert!(!catalog.has_category(category_id));
        assert!(catalog.add_category(category_id, "Shoes", None).is_ok());
    }
}
