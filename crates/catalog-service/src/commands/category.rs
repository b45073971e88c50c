use crate::checks::{check_id, not_found_message, required};
use crate::dto::CategoryCreated;
use async_trait::async_trait;
use catalog_core::rules::not_blank;
use catalog_core::{
    CatalogError, CatalogResult, CategoryId, Request, RequestHandler,
    ValidationFailures, Validator,
};
use catalog_domain::Category;
use catalog_repository::CategoryRepository;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

#[derive(Debug, Clone, Validate)]
pub struct CreateCategory {
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "Value must be at most 255 characters.")
    )]
    pub display_name: String,
}

impl Request for CreateCategory {
    type Response = CategoryCreated;
    const NAME: &'static str = "CreateCategory";
}

pub struct CreateCategoryHandler {
    categories: Arc<dyn CategoryRepository>,
}

impl CreateCategoryHandler {
    #[must_use]
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl RequestHandler<CreateCategory> for CreateCategoryHandler {
    async fn handle(&self, request: CreateCategory) -> CatalogResult<CategoryCreated> {
        let category = Category::create(request.display_name)?;
        self.categories.add(&category).await?;

        info!("Category created: {}", category.category_id());
        Ok(CategoryCreated {
            category_id: category.category_id(),
        })
    }
}

#[derive(Debug, Clone, Validate)]
pub struct UpdateCategory {
    pub category_id: Option<CategoryId>,
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "Value must be at most 255 characters.")
    )]
    pub display_name: String,
}

impl Request for UpdateCategory {
    type Response = ();
    const NAME: &'static str = "UpdateCategory";
}

#[derive(Debug, Clone, Copy)]
pub struct RemoveCategory {
    pub category_id: Option<CategoryId>,
}

impl Request for RemoveCategory {
    type Response = ();
    const NAME: &'static str = "RemoveCategory";
}

pub struct CategoryExistsValidator {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryExistsValidator {
    #[must_use]
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    async fn check(&self, category_id: Option<CategoryId>) -> CatalogResult<ValidationFailures> {
        let mut failures = ValidationFailures::new();
        if let Some(category_id) = check_id(&mut failures, "category_id", "CategoryId", category_id)
        {
            if !self.categories.exists(category_id).await? {
                failures.add("category_id", not_found_message("Category", category_id));
            }
        }
        Ok(failures)
    }
}

#[async_trait]
impl Validator<UpdateCategory> for CategoryExistsValidator {
    async fn validate(&self, request: &UpdateCategory) -> CatalogResult<ValidationFailures> {
        self.check(request.category_id).await
    }
}

#[async_trait]
impl Validator<RemoveCategory> for CategoryExistsValidator {
    async fn validate(&self, request: &RemoveCategory) -> CatalogResult<ValidationFailures> {
        self.check(request.category_id).await
    }
}

pub struct UpdateCategoryHandler {
    categories: Arc<dyn CategoryRepository>,
}

impl UpdateCategoryHandler {
    #[must_use]
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl RequestHandler<UpdateCategory> for UpdateCategoryHandler {
    async fn handle(&self, request: UpdateCategory) -> CatalogResult<()> {
        let category_id = required(request.category_id, "category_id", "CategoryId")?;
        let mut category = self
            .categories
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Category", category_id))?;

        category.change_display_name(request.display_name)?;
        self.categories.update(&category).await?;

        info!("Category updated: {}", category_id);
        Ok(())
    }
}

/// Removes a category. The catalog entries referencing it go with it.
pub struct RemoveCategoryHandler {
    categories: Arc<dyn CategoryRepository>,
}

impl RemoveCategoryHandler {
    #[must_use]
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl RequestHandler<RemoveCategory> for RemoveCategoryHandler {
    async fn handle(&self, request: RemoveCategory) -> CatalogResult<()> {
        let category_id = required(request.category_id, "category_id", "CategoryId")?;
        if !self.categories.remove(category_id).await? {
            return Err(CatalogError::not_found("Category", category_id));
        }

        info!("Category removed: {}", category_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryCategoryRepository;
    use catalog_core::ValidateExt;

    #[tokio::test]
    async fn test_category_lifecycle() {
        let categories = Arc::new(InMemoryCategoryRepository::new());

        let created = CreateCategoryHandler::new(categories.clone())
            .handle(CreateCategory {
                display_name: "Shoes".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(categories.len(), 1);

        UpdateCategoryHandler::new(categories.clone())
            .handle(UpdateCategory {
                category_id: Some(created.category_id),
                display_name: "Footwear".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(
            categories.get(created.category_id).unwrap().display_name(),
            "Footwear"
        );

        RemoveCategoryHandler::new(categories.clone())
            .handle(RemoveCategory {
                category_id: Some(created.category_id),
            })
            .await
            .unwrap();
        assert_eq!(categories.len(), 0);
    }

    #[tokio::test]
    async fn test_category_exists_validator() {
        let validator = CategoryExistsValidator::new(Arc::new(InMemoryCategoryRepository::new()));
        let missing = CategoryId::new();

        let failures = validator
            .validate(&RemoveCategory {
                category_id: Some(missing),
            })
            .await
            .unwrap();
        assert_eq!(
            failures.errors()[0].message,
            format!("Category#{missing} could not be found.")
        );

        let failures = validator
            .validate(&RemoveCategory { category_id: None })
            .await
            .unwrap();
        assert_eq!(failures.errors()[0].message, "CategoryId is empty or invalid.");
    }

    #[test]
    fn test_long_name_fails_field_rules() {
        let failures = CreateCategory {
            display_name: "x".repeat(256),
        }
        .validate_fields();

        assert!(failures.has_error_for("display_name"));
    }
}
