//! Commands on the categories placed in a catalog.

use super::{check_catalog, load_catalog};
use crate::checks::{check_id, check_window, not_found_message, required};
use crate::dto::CatalogCategoryCreated;
use async_trait::async_trait;
use catalog_core::rules::not_blank;
use catalog_core::{
    CatalogCategoryId, CatalogError, CatalogId, CatalogResult, CategoryId, Request,
    RequestHandler, ValidationFailures, Validator,
};
use catalog_repository::{CatalogRepository, CategoryRepository};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

/// Places a category in a catalog, at the root or under a parent.
#[derive(Debug, Clone, Validate)]
pub struct CreateCatalogCategory {
    pub catalog_id: Option<CatalogId>,
    pub category_id: Option<CategoryId>,
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "Value must be at most 255 characters.")
    )]
    pub display_name: String,
    pub parent_catalog_category_id: Option<CatalogCategoryId>,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
}

impl Request for CreateCatalogCategory {
    type Response = CatalogCategoryCreated;
    const NAME: &'static str = "CreateCatalogCategory";
}

pub struct CreateCatalogCategoryValidator {
    catalogs: Arc<dyn CatalogRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl CreateCatalogCategoryValidator {
    #[must_use]
    pub fn new(
        catalogs: Arc<dyn CatalogRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            catalogs,
            categories,
        }
    }
}

#[async_trait]
impl Validator<CreateCatalogCategory> for CreateCatalogCategoryValidator {
    async fn validate(&self, request: &CreateCatalogCategory) -> CatalogResult<ValidationFailures> {
        let mut failures = ValidationFailures::new();
        let catalog =
            check_catalog(self.catalogs.as_ref(), &mut failures, request.catalog_id).await?;

        if let Some(category_id) =
            check_id(&mut failures, "category_id", "CategoryId", request.category_id)
        {
            if !self.categories.exists(category_id).await? {
                failures.add("category_id", not_found_message("Category", category_id));
            } else if let Some(catalog) = &catalog {
                if catalog.has_category(category_id) {
                    failures.add(
                        "category_id",
                        format!(
                            "Category#{category_id} is already in Catalog#{}.",
                            catalog.catalog_id()
                        ),
                    );
                }
            }
        }

        if let (Some(catalog), Some(parent_id)) = (&catalog, request.parent_catalog_category_id) {
            if catalog.find_category(parent_id).is_none() {
                failures.add(
                    "parent_catalog_category_id",
                    format!(
                        "CatalogCategory#{parent_id} could not be found in Catalog#{}.",
                        catalog.catalog_id()
                    ),
                );
            }
        }

        check_window(&mut failures, request.available_from, request.available_to);
        Ok(failures)
    }
}

pub struct CreateCatalogCategoryHandler {
    catalogs: Arc<dyn CatalogRepository>,
}

impl CreateCatalogCategoryHandler {
    #[must_use]
    pub fn new(catalogs: Arc<dyn CatalogRepository>) -> Self {
        Self { catalogs }
    }
}

#[async_trait]
impl RequestHandler<CreateCatalogCategory> for CreateCatalogCategoryHandler {
    async fn handle(&self, request: CreateCatalogCategory) -> CatalogResult<CatalogCategoryCreated> {
        let catalog_id = required(request.catalog_id, "catalog_id", "CatalogId")?;
        let category_id = required(request.category_id, "category_id", "CategoryId")?;
        let mut catalog = load_catalog(self.catalogs.as_ref(), catalog_id).await?;

        let catalog_category = catalog.add_category(
            category_id,
            request.display_name,
            request.parent_catalog_category_id,
        )?;
        catalog_category.set_availability(request.available_from, request.available_to)?;
        let catalog_category_id = catalog_category.catalog_category_id();
        self.catalogs.update(&catalog).await?;

        info!(
            "Category {} placed in catalog {} as {}",
            category_id, catalog_id, catalog_category_id
        );
        Ok(CatalogCategoryCreated {
            catalog_category_id,
        })
    }
}

/// Renames a category inside a catalog and replaces its availability window.
#[derive(Debug, Clone, Validate)]
pub struct UpdateCatalogCategory {
    pub catalog_id: Option<CatalogId>,
    pub catalog_category_id: Option<CatalogCategoryId>,
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "Value must be at most 255 characters.")
    )]
    pub display_name: String,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
}

impl Request for UpdateCatalogCategory {
    type Response = ();
    const NAME: &'static str = "UpdateCatalogCategory";
}

/// Removes a category and all of its descendants from a catalog.
#[derive(Debug, Clone, Copy)]
pub struct RemoveCatalogCategory {
    pub catalog_id: Option<CatalogId>,
    pub catalog_category_id: Option<CatalogCategoryId>,
}

impl Request for RemoveCatalogCategory {
    type Response = ();
    const NAME: &'static str = "RemoveCatalogCategory";
}

/// Checks that a catalog category exists inside its catalog.
///
/// Both ids are checked for presence first; the lookup only runs once both
/// are present, and reports on `catalog_id` when the catalog is missing or on
/// `catalog_category_id` when the category is not part of it.
pub struct CatalogCategoryExistsValidator {
    catalogs: Arc<dyn CatalogRepository>,
}

impl CatalogCategoryExistsValidator {
    #[must_use]
    pub fn new(catalogs: Arc<dyn CatalogRepository>) -> Self {
        Self { catalogs }
    }

    async fn check(
        &self,
        catalog_id: Option<CatalogId>,
        catalog_category_id: Option<CatalogCategoryId>,
    ) -> CatalogResult<ValidationFailures> {
        let mut failures = ValidationFailures::new();
        let catalog_id = check_id(&mut failures, "catalog_id", "CatalogId", catalog_id);
        let catalog_category_id = check_id(
            &mut failures,
            "catalog_category_id",
            "CatalogCategoryId",
            catalog_category_id,
        );

        let (Some(catalog_id), Some(catalog_category_id)) = (catalog_id, catalog_category_id)
        else {
            return Ok(failures);
        };

        match self.catalogs.find_by_id(catalog_id).await? {
            None => failures.add("catalog_id", format!("Could not found Catalog#{catalog_id}")),
            Some(catalog) if catalog.find_category(catalog_category_id).is_none() => {
                failures.add(
                    "catalog_category_id",
                    format!(
                        "Could not found CatalogCategory#{catalog_category_id} in Catalog#{catalog_id}"
                    ),
                );
            }
            Some(_) => {}
        }

        Ok(failures)
    }
}

#[async_trait]
impl Validator<UpdateCatalogCategory> for CatalogCategoryExistsValidator {
    async fn validate(&self, request: &UpdateCatalogCategory) -> CatalogResult<ValidationFailures> {
        let mut failures = self
            .check(request.catalog_id, request.catalog_category_id)
            .await?;
        check_window(&mut failures, request.available_from, request.available_to);
        Ok(failures)
    }
}

#[async_trait]
impl Validator<RemoveCatalogCategory> for CatalogCategoryExistsValidator {
    async fn validate(&self, request: &RemoveCatalogCategory) -> CatalogResult<ValidationFailures> {
        self.check(request.catalog_id, request.catalog_category_id)
            .await
    }
}

pub struct UpdateCatalogCategoryHandler {
    catalogs: Arc<dyn CatalogRepository>,
}

impl UpdateCatalogCategoryHandler {
    #[must_use]
    pub fn new(catalogs: Arc<dyn CatalogRepository>) -> Self {
        Self { catalogs }
    }
}

#[async_trait]
impl RequestHandler<UpdateCatalogCategory> for UpdateCatalogCategoryHandler {
    async fn handle(&self, request: UpdateCatalogCategory) -> CatalogResult<()> {
        let catalog_id = required(request.catalog_id, "catalog_id", "CatalogId")?;
        let catalog_category_id = required(
            request.catalog_category_id,
            "catalog_category_id",
            "CatalogCategoryId",
        )?;
        let mut catalog = load_catalog(self.catalogs.as_ref(), catalog_id).await?;

        let catalog_category = catalog
            .find_category_mut(catalog_category_id)
            .ok_or_else(|| CatalogError::not_found("CatalogCategory", catalog_category_id))?;
        catalog_category.change_display_name(request.display_name)?;
        catalog_category.set_availability(request.available_from, request.available_to)?;
        self.catalogs.update(&catalog).await?;

        info!("Catalog category updated: {}", catalog_category_id);
        Ok(())
    }
}

pub struct RemoveCatalogCategoryHandler {
    catalogs: Arc<dyn CatalogRepository>,
}

impl RemoveCatalogCategoryHandler {
    #[must_use]
    pub fn new(catalogs: Arc<dyn CatalogRepository>) -> Self {
        Self { catalogs }
    }
}

#[async_trait]
impl RequestHandler<RemoveCatalogCategory> for RemoveCatalogCategoryHandler {
    async fn handle(&self, request: RemoveCatalogCategory) -> CatalogResult<()> {
        let catalog_id = required(request.catalog_id, "catalog_id", "CatalogId")?;
        let catalog_category_id = required(
            request.catalog_category_id,
            "catalog_category_id",
            "CatalogCategoryId",
        )?;
        let mut catalog = load_catalog(self.catalogs.as_ref(), catalog_id).await?;

        let removed = catalog.remove_category_with_descendants(catalog_category_id)?;
        self.catalogs.update(&catalog).await?;

        info!(
            "Catalog category {} removed with {} descendants",
            catalog_category_id,
            removed.len() - 1
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{InMemoryCatalogRepository, InMemoryCategoryRepository};
    use catalog_core::{Mediator, Repository};
    use catalog_domain::{Catalog, Category};
    use chrono::TimeZone;
    use mockall::mock;
    use mockall::predicate::always;

    mock! {
        CatalogRepo {}

        #[async_trait]
        impl Repository<Catalog> for CatalogRepo {
            async fn find_by_id(&self, id: CatalogId) -> CatalogResult<Option<Catalog>>;
            async fn exists(&self, id: CatalogId) -> CatalogResult<bool>;
            async fn add(&self, aggregate: &Catalog) -> CatalogResult<()>;
            async fn update(&self, aggregate: &Catalog) -> CatalogResult<()>;
            async fn remove(&self, id: CatalogId) -> CatalogResult<bool>;
        }

        impl CatalogRepository for CatalogRepo {}
    }

    /// A catalog with `Shoes` at the root and `Boots` below it.
    fn catalog_with_tree() -> (Catalog, CatalogCategoryId, CatalogCategoryId) {
        let mut catalog = Catalog::create("Spring").unwrap();
        let root = catalog
            .add_category(CategoryId::new(), "Shoes", None)
            .unwrap()
            .catalog_category_id();
        let child = catalog
            .add_category(CategoryId::new(), "Boots", Some(root))
            .unwrap()
            .catalog_category_id();
        (catalog, root, child)
    }

    #[tokio::test]
    async fn test_remove_catalog_category_updates_catalog_once() {
        let (catalog, root, child) = catalog_with_tree();
        let catalog_id = catalog.catalog_id();

        let mut repo = MockCatalogRepo::new();
        repo.expect_find_by_id()
            .with(always())
            .times(1)
            .returning(move |_| Ok(Some(catalog.clone())));
        repo.expect_update()
            .withf(move |updated: &Catalog| {
                updated.categories().is_empty()
                    && updated.find_category(root).is_none()
                    && updated.find_category(child).is_none()
            })
            .times(1)
            .returning(|_| Ok(()));

        RemoveCatalogCategoryHandler::new(Arc::new(repo))
            .handle(RemoveCatalogCategory {
                catalog_id: Some(catalog_id),
                catalog_category_id: Some(root),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_invalid_command_never_reaches_handler() {
        let (catalog, _, _) = catalog_with_tree();
        let repo = Arc::new(InMemoryCatalogRepository::with(vec![catalog]));

        let mediator = Mediator::builder()
            .register_validated(
                RemoveCatalogCategoryHandler::new(repo.clone()),
                CatalogCategoryExistsValidator::new(repo.clone()),
            )
            .build();

        let err = mediator
            .send(RemoveCatalogCategory {
                catalog_id: None,
                catalog_category_id: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(repo.update_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_ids_fail_on_both_fields() {
        let validator = CatalogCategoryExistsValidator::new(Arc::new(
            InMemoryCatalogRepository::new(),
        ));

        let failures = validator
            .check(None, None)
            .await
            .unwrap();

        assert!(failures.has_error_for("catalog_id"));
        assert!(failures.has_error_for("catalog_category_id"));
    }

    #[tokio::test]
    async fn test_missing_catalog_fails_on_catalog_id_only() {
        let validator = CatalogCategoryExistsValidator::new(Arc::new(
            InMemoryCatalogRepository::new(),
        ));
        let catalog_id = CatalogId::new();

        let failures = validator
            .check(Some(catalog_id), Some(CatalogCategoryId::new()))
            .await
            .unwrap();

        assert_eq!(failures.len(), 1);
        assert_eq!(failures.errors()[0].field, "catalog_id");
        assert_eq!(
            failures.errors()[0].message,
            format!("Could not found Catalog#{catalog_id}")
        );
    }

    #[tokio::test]
    async fn test_nil_catalog_fails_on_catalog_id_only() {
        let validator = CatalogCategoryExistsValidator::new(Arc::new(
            InMemoryCatalogRepository::new(),
        ));

        let failures = validator
            .check(None, Some(CatalogCategoryId::new()))
            .await
            .unwrap();

        assert!(failures.has_error_for("catalog_id"));
        assert!(!failures.has_error_for("catalog_category_id"));
    }

    #[tokio::test]
    async fn test_unknown_catalog_category_fails_on_its_field() {
        let (catalog, _, _) = catalog_with_tree();
        let catalog_id = catalog.catalog_id();
        let validator = CatalogCategoryExistsValidator::new(Arc::new(
            InMemoryCatalogRepository::with(vec![catalog]),
        ));

        let failures = validator
            .check(Some(catalog_id), Some(CatalogCategoryId::new()))
            .await
            .unwrap();
        assert!(failures.has_error_for("catalog_category_id"));
        assert!(!failures.has_error_for("catalog_id"));

        let failures = validator.check(Some(catalog_id), None).await.unwrap();
        assert!(failures.has_error_for("catalog_category_id"));
        assert!(!failures.has_error_for("catalog_id"));
    }

    #[tokio::test]
    async fn test_create_catalog_category_under_parent() {
        let (catalog, root, _) = catalog_with_tree();
        let catalog_id = catalog.catalog_id();
        let hats = Category::create("Hats").unwrap();
        let catalogs = Arc::new(InMemoryCatalogRepository::with(vec![catalog]));
        let categories = Arc::new(InMemoryCategoryRepository::with(vec![hats.clone()]));

        let command = CreateCatalogCategory {
            catalog_id: Some(catalog_id),
            category_id: Some(hats.category_id()),
            display_name: "Hats".to_string(),
            parent_catalog_category_id: Some(root),
            available_from: None,
            available_to: None,
        };
        let failures = CreateCatalogCategoryValidator::new(catalogs.clone(), categories)
            .validate(&command)
            .await
            .unwrap();
        assert!(failures.is_empty());

        let created = CreateCatalogCategoryHandler::new(catalogs.clone())
            .handle(command)
            .await
            .unwrap();

        let stored = catalogs.get(catalog_id).unwrap();
        let placed = stored.find_category(created.catalog_category_id).unwrap();
        assert_eq!(placed.parent_id(), Some(root));
        assert_eq!(catalogs.update_count(), 1);
    }

    #[tokio::test]
    async fn test_create_catalog_category_rejects_duplicates_and_foreign_parents() {
        let (catalog, _, _) = catalog_with_tree();
        let catalog_id = catalog.catalog_id();
        let placed = catalog.categories()[0].category_id();
        let shoes = Category::restore(placed, "Shoes".to_string());
        let catalogs = Arc::new(InMemoryCatalogRepository::with(vec![catalog]));
        let categories = Arc::new(InMemoryCategoryRepository::with(vec![shoes]));
        let validator = CreateCatalogCategoryValidator::new(catalogs, categories);

        let failures = validator
            .validate(&CreateCatalogCategory {
                catalog_id: Some(catalog_id),
                category_id: Some(placed),
                display_name: "Shoes".to_string(),
                parent_catalog_category_id: Some(CatalogCategoryId::new()),
                available_from: None,
                available_to: None,
            })
            .await
            .unwrap();

        assert_eq!(failures.len(), 2);
        assert!(failures.has_error_for("category_id"));
        assert!(failures.has_error_for("parent_catalog_category_id"));
    }

    #[tokio::test]
    async fn test_update_catalog_category() {
        let (catalog, _, child) = catalog_with_tree();
        let catalog_id = catalog.catalog_id();
        let catalogs = Arc::new(InMemoryCatalogRepository::with(vec![catalog]));

        UpdateCatalogCategoryHandler::new(catalogs.clone())
            .handle(UpdateCatalogCategory {
                catalog_id: Some(catalog_id),
                catalog_category_id: Some(child),
                display_name: "Winter Boots".to_string(),
                available_from: None,
                available_to: None,
            })
            .await
            .unwrap();

        let stored = catalogs.get(catalog_id).unwrap();
        assert_eq!(stored.find_category(child).unwrap().display_name(), "Winter Boots");
    }

    #[tokio::test]
    async fn test_create_catalog_category_with_window() {
        let (catalog, _, _) = catalog_with_tree();
        let catalog_id = catalog.catalog_id();
        let hats = Category::create("Hats").unwrap();
        let catalogs = Arc::new(InMemoryCatalogRepository::with(vec![catalog]));
        let from = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2026, 8, 31, 0, 0, 0).unwrap();

        let created = CreateCatalogCategoryHandler::new(catalogs.clone())
            .handle(CreateCatalogCategory {
                catalog_id: Some(catalog_id),
                category_id: Some(hats.category_id()),
                display_name: "Summer Hats".to_string(),
                parent_catalog_category_id: None,
                available_from: Some(from),
                available_to: Some(to),
            })
            .await
            .unwrap();

        let stored = catalogs.get(catalog_id).unwrap();
        let placed = stored.find_category(created.catalog_category_id).unwrap();
        assert_eq!(placed.available_from(), Some(from));
        assert_eq!(placed.available_to(), Some(to));
        assert!(placed.is_available_at(Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap()));
        assert!(!placed.is_available_at(Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap()));
    }

    #[tokio::test]
    async fn test_inverted_window_fails_on_available_from() {
        let (catalog, _, child) = catalog_with_tree();
        let catalog_id = catalog.catalog_id();
        let hats = Category::create("Hats").unwrap();
        let catalogs = Arc::new(InMemoryCatalogRepository::with(vec![catalog]));
        let categories = Arc::new(InMemoryCategoryRepository::with(vec![hats.clone()]));
        let from = Some(Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap());
        let to = Some(Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap());

        let failures = CreateCatalogCategoryValidator::new(catalogs.clone(), categories)
            .validate(&CreateCatalogCategory {
                catalog_id: Some(catalog_id),
                category_id: Some(hats.category_id()),
                display_name: "Hats".to_string(),
                parent_catalog_category_id: None,
                available_from: from,
                available_to: to,
            })
            .await
            .unwrap();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures.errors()[0].field, "available_from");
        assert_eq!(
            failures.errors()[0].message,
            "Available from must not be later than available to."
        );

        let failures = CatalogCategoryExistsValidator::new(catalogs)
            .validate(&UpdateCatalogCategory {
                catalog_id: Some(catalog_id),
                catalog_category_id: Some(child),
                display_name: "Boots".to_string(),
                available_from: from,
                available_to: to,
            })
            .await
            .unwrap();
        assert_eq!(failures.len(), 1);
        assert!(failures.has_error_for("available_from"));
    }

    #[tokio::test]
    async fn test_update_replaces_window() {
        let (mut catalog, _, child) = catalog_with_tree();
        let from = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        catalog
            .find_category_mut(child)
            .unwrap()
            .set_availability(Some(from), None)
            .unwrap();
        let catalog_id = catalog.catalog_id();
        let catalogs = Arc::new(InMemoryCatalogRepository::with(vec![catalog]));

        UpdateCatalogCategoryHandler::new(catalogs.clone())
            .handle(UpdateCatalogCategory {
                catalog_id: Some(catalog_id),
                catalog_category_id: Some(child),
                display_name: "Boots".to_string(),
                available_from: None,
                available_to: None,
            })
            .await
            .unwrap();

        let stored = catalogs.get(catalog_id).unwrap();
        let boots = stored.find_category(child).unwrap();
        assert_eq!(boots.available_from(), None);
        assert!(boots.is_available_at(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()));
    }
}
