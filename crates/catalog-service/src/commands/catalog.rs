//! Catalog commands.

use super::load_catalog;
use crate::checks::{check_id, check_name, not_found_message, required};
use crate::dto::CatalogCreated;
use async_trait::async_trait;
use catalog_core::rules::not_blank;
use catalog_core::{
    CatalogError, CatalogId, CatalogResult, CategoryId, Request, RequestHandler,
    ValidationFailures, Validator,
};
use catalog_domain::Catalog;
use catalog_repository::{CatalogRepository, CategoryRepository};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

/// A category placed at the root of a new catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogCategoryEntry {
    pub category_id: Option<CategoryId>,
    pub display_name: String,
}

/// Creates a catalog, optionally with root categories.
#[derive(Debug, Clone, Validate)]
pub struct CreateCatalog {
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "Value must be at most 255 characters.")
    )]
    pub display_name: String,
    pub categories: Vec<CatalogCategoryEntry>,
}

impl Request for CreateCatalog {
    type Response = CatalogCreated;
    const NAME: &'static str = "CreateCatalog";
}

pub struct CreateCatalogValidator {
    categories: Arc<dyn CategoryRepository>,
}

impl CreateCatalogValidator {
    #[must_use]
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl Validator<CreateCatalog> for CreateCatalogValidator {
    async fn validate(&self, request: &CreateCatalog) -> CatalogResult<ValidationFailures> {
        let mut failures = ValidationFailures::new();
        let mut seen = HashSet::new();

        for (index, entry) in request.categories.iter().enumerate() {
            let field = format!("categories[{index}].category_id");
            if let Some(category_id) =
                check_id(&mut failures, &field, "CategoryId", entry.category_id)
            {
                if !seen.insert(category_id) {
                    failures.add(&field, format!("Category#{category_id} is duplicated."));
                } else if !self.categories.exists(category_id).await? {
                    failures.add(&field, not_found_message("Category", category_id));
                }
            }
            check_name(
                &mut failures,
                &format!("categories[{index}].display_name"),
                &entry.display_name,
            );
        }

        Ok(failures)
    }
}

pub struct CreateCatalogHandler {
    catalogs: Arc<dyn CatalogRepository>,
}

impl CreateCatalogHandler {
    #[must_use]
    pub fn new(catalogs: Arc<dyn CatalogRepository>) -> Self {
        Self { catalogs }
    }
}

#[async_trait]
impl RequestHandler<CreateCatalog> for CreateCatalogHandler {
    async fn handle(&self, request: CreateCatalog) -> CatalogResult<CatalogCreated> {
        let mut catalog = Catalog::create(request.display_name)?;
        for entry in request.categories {
            let category_id = required(entry.category_id, "category_id", "CategoryId")?;
            catalog.add_category(category_id, entry.display_name, None)?;
        }

        self.catalogs.add(&catalog).await?;

        info!(
            "Catalog created: {} with {} categories",
            catalog.catalog_id(),
            catalog.categories().len()
        );
        Ok(CatalogCreated {
            catalog_id: catalog.catalog_id(),
        })
    }
}

/// Renames a catalog.
#[derive(Debug, Clone, Validate)]
pub struct UpdateCatalog {
    pub catalog_id: Option<CatalogId>,
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "Value must be at most 255 characters.")
    )]
    pub display_name: String,
}

impl Request for UpdateCatalog {
    type Response = ();
    const NAME: &'static str = "UpdateCatalog";
}

/// Checks that the targeted catalog exists. Shared by update and remove.
pub struct CatalogExistsValidator {
    catalogs: Arc<dyn CatalogRepository>,
}

impl CatalogExistsValidator {
    #[must_use]
    pub fn new(catalogs: Arc<dyn CatalogRepository>) -> Self {
        Self { catalogs }
    }

    async fn check(&self, catalog_id: Option<CatalogId>) -> CatalogResult<ValidationFailures> {
        let mut failures = ValidationFailures::new();
        if let Some(catalog_id) = check_id(&mut failures, "catalog_id", "CatalogId", catalog_id) {
            if !self.catalogs.exists(catalog_id).await? {
                failures.add("catalog_id", not_found_message("Catalog", catalog_id));
            }
        }
        Ok(failures)
    }
}

#[async_trait]
impl Validator<UpdateCatalog> for CatalogExistsValidator {
    async fn validate(&self, request: &UpdateCatalog) -> CatalogResult<ValidationFailures> {
        self.check(request.catalog_id).await
    }
}

#[async_trait]
impl Validator<RemoveCatalog> for CatalogExistsValidator {
    async fn validate(&self, request: &RemoveCatalog) -> CatalogResult<ValidationFailures> {
        self.check(request.catalog_id).await
    }
}

pub struct UpdateCatalogHandler {
    catalogs: Arc<dyn CatalogRepository>,
}

impl UpdateCatalogHandler {
    #[must_use]
    pub fn new(catalogs: Arc<dyn CatalogRepository>) -> Self {
        Self { catalogs }
    }
}

#[async_trait]
impl RequestHandler<UpdateCatalog> for UpdateCatalogHandler {
    async fn handle(&self, request: UpdateCatalog) -> CatalogResult<()> {
        let catalog_id = required(request.catalog_id, "catalog_id", "CatalogId")?;
        let mut catalog = load_catalog(self.catalogs.as_ref(), catalog_id).await?;

        catalog.change_display_name(request.display_name)?;
        self.catalogs.update(&catalog).await?;

        info!("Catalog updated: {}", catalog_id);
        Ok(())
    }
}

/// Removes a catalog with everything it owns.
#[derive(Debug, Clone, Copy)]
pub struct RemoveCatalog {
    pub catalog_id: Option<CatalogId>,
}

impl Request for RemoveCatalog {
    type Response = ();
    const NAME: &'static str = "RemoveCatalog";
}

pub struct RemoveCatalogHandler {
    catalogs: Arc<dyn CatalogRepository>,
}

impl RemoveCatalogHandler {
    #[must_use]
    pub fn new(catalogs: Arc<dyn CatalogRepository>) -> Self {
        Self { catalogs }
    }
}

#[async_trait]
impl RequestHandler<RemoveCatalog> for RemoveCatalogHandler {
    async fn handle(&self, request: RemoveCatalog) -> CatalogResult<()> {
        let catalog_id = required(request.catalog_id, "catalog_id", "CatalogId")?;
        if !self.catalogs.remove(catalog_id).await? {
            return Err(CatalogError::not_found("Catalog", catalog_id));
        }

        info!("Catalog removed: {}", catalog_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{InMemoryCatalogRepository, InMemoryCategoryRepository};
    use catalog_core::ValidateExt;
    use catalog_domain::Category;

    fn create_catalog(categories: Vec<CatalogCategoryEntry>) -> CreateCatalog {
        CreateCatalog {
            display_name: "Spring 2026".to_string(),
            categories,
        }
    }

    fn entry(category_id: Option<CategoryId>) -> CatalogCategoryEntry {
        CatalogCategoryEntry {
            category_id,
            display_name: "Shoes".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_catalog_with_categories() {
        let shoes = Category::create("Shoes").unwrap();
        let categories = Arc::new(InMemoryCategoryRepository::with(vec![shoes.clone()]));
        let catalogs = Arc::new(InMemoryCatalogRepository::new());
        let command = create_catalog(vec![entry(Some(shoes.category_id()))]);

        let failures = CreateCatalogValidator::new(categories)
            .validate(&command)
            .await
            .unwrap();
        assert!(failures.is_empty());

        let created = CreateCatalogHandler::new(catalogs.clone())
            .handle(command)
            .await
            .unwrap();

        let stored = catalogs.get(created.catalog_id).unwrap();
        assert_eq!(stored.display_name(), "Spring 2026");
        assert_eq!(stored.categories().len(), 1);
        assert!(stored.has_category(shoes.category_id()));
    }

    #[tokio::test]
    async fn test_create_catalog_rejects_bad_entries() {
        let categories = Arc::new(InMemoryCategoryRepository::new());
        let missing = CategoryId::new();
        let command = create_catalog(vec![
            entry(None),
            entry(Some(missing)),
            CatalogCategoryEntry {
                category_id: Some(missing),
                display_name: "  ".to_string(),
            },
        ]);

        let failures = CreateCatalogValidator::new(categories)
            .validate(&command)
            .await
            .unwrap();

        assert_eq!(
            failures.errors()[0].message,
            "CategoryId is empty or invalid."
        );
        assert_eq!(
            failures.errors()[1].message,
            format!("Category#{missing} could not be found.")
        );
        assert!(failures.has_error_for("categories[2].category_id"));
        assert!(failures.has_error_for("categories[2].display_name"));
        assert_eq!(failures.len(), 4);
    }

    #[test]
    fn test_blank_catalog_name_fails_field_rules() {
        let failures = create_catalog(Vec::new())
            .validate_fields();
        assert!(failures.is_empty());

        let failures = CreateCatalog {
            display_name: "   ".to_string(),
            categories: Vec::new(),
        }
        .validate_fields();
        assert!(failures.has_error_for("display_name"));
    }

    #[tokio::test]
    async fn test_update_catalog_validator() {
        let catalog = Catalog::create("Spring").unwrap();
        let catalogs = Arc::new(InMemoryCatalogRepository::with(vec![catalog.clone()]));
        let validator = CatalogExistsValidator::new(catalogs);

        let ok = UpdateCatalog {
            catalog_id: Some(catalog.catalog_id()),
            display_name: "Summer".to_string(),
        };
        assert!(validator.validate(&ok).await.unwrap().is_empty());

        let missing = UpdateCatalog {
            catalog_id: Some(CatalogId::new()),
            display_name: "Summer".to_string(),
        };
        let failures = validator.validate(&missing).await.unwrap();
        assert!(failures.errors()[0].message.ends_with("could not be found."));

        let empty = RemoveCatalog { catalog_id: None };
        let failures = validator.validate(&empty).await.unwrap();
        assert_eq!(failures.errors()[0].field, "catalog_id");
        assert_eq!(failures.errors()[0].message, "CatalogId is empty or invalid.");
    }

    #[tokio::test]
    async fn test_update_and_remove_catalog() {
        let catalog = Catalog::create("Spring").unwrap();
        let catalog_id = catalog.catalog_id();
        let catalogs = Arc::new(InMemoryCatalogRepository::with(vec![catalog]));

        UpdateCatalogHandler::new(catalogs.clone())
            .handle(UpdateCatalog {
                catalog_id: Some(catalog_id),
                display_name: "Summer".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(catalogs.get(catalog_id).unwrap().display_name(), "Summer");

        let handler = RemoveCatalogHandler::new(catalogs.clone());
        handler
            .handle(RemoveCatalog {
                catalog_id: Some(catalog_id),
            })
            .await
            .unwrap();
        assert!(catalogs.get(catalog_id).is_none());

        let err = handler
            .handle(RemoveCatalog {
                catalog_id: Some(catalog_id),
            })
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
