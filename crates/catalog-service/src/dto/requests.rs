//! Request bodies accepted over HTTP.
//!
//! Identifiers arrive as raw UUIDs so that nil, missing or unparsable values
//! reach the validators as `None` instead of failing deserialization.

use crate::commands::{
    CatalogCategoryEntry, CreateCatalog, CreateCatalogCategory, CreateCatalogProduct,
    CreateCategory, CreateProduct, UpdateCatalog, UpdateCatalogCategory, UpdateCatalogProduct,
    UpdateCategory, UpdateProduct,
};
use catalog_core::{
    CatalogCategoryId, CatalogId, CatalogProductId, CategoryId, ProductId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Reads an id field, mapping anything that is not a UUID string to `None`.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|raw| Uuid::parse_str(raw).ok()))
}

/// A category to place at the root of a new catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CatalogCategoryEntryRequest {
    #[serde(deserialize_with = "lenient_id")]
    pub category_id: Option<Uuid>,
    pub display_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateCatalogRequest {
    pub display_name: String,
    pub categories: Vec<CatalogCategoryEntryRequest>,
}

impl CreateCatalogRequest {
    #[must_use]
    pub fn into_command(self) -> CreateCatalog {
        CreateCatalog {
            display_name: self.display_name,
            categories: self
                .categories
                .into_iter()
                .map(|entry| CatalogCategoryEntry {
                    category_id: CategoryId::from_optional(entry.category_id),
                    display_name: entry.display_name,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateCatalogRequest {
    pub display_name: String,
}

impl UpdateCatalogRequest {
    #[must_use]
    pub fn into_command(self, catalog_id: Option<CatalogId>) -> UpdateCatalog {
        UpdateCatalog {
            catalog_id,
            display_name: self.display_name,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateCatalogCategoryRequest {
    #[serde(deserialize_with = "lenient_id")]
    pub category_id: Option<Uuid>,
    pub display_name: String,
    /// Parent inside the same catalog; omitted for a root category.
    #[serde(deserialize_with = "lenient_id")]
    pub parent_catalog_category_id: Option<Uuid>,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
}

impl CreateCatalogCategoryRequest {
    #[must_use]
    pub fn into_command(self, catalog_id: Option<CatalogId>) -> CreateCatalogCategory {
        CreateCatalogCategory {
            catalog_id,
            category_id: CategoryId::from_optional(self.category_id),
            display_name: self.display_name,
            parent_catalog_category_id: CatalogCategoryId::from_optional(
                self.parent_catalog_category_id,
            ),
            available_from: self.available_from,
            available_to: self.available_to,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateCatalogCategoryRequest {
    pub display_name: String,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
}

impl UpdateCatalogCategoryRequest {
    #[must_use]
    pub fn into_command(
        self,
        catalog_id: Option<CatalogId>,
        catalog_category_id: Option<CatalogCategoryId>,
    ) -> UpdateCatalogCategory {
        UpdateCatalogCategory {
            catalog_id,
            catalog_category_id,
            display_name: self.display_name,
            available_from: self.available_from,
            available_to: self.available_to,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateCatalogProductRequest {
    #[serde(deserialize_with = "lenient_id")]
    pub product_id: Option<Uuid>,
    pub display_name: String,
}

impl CreateCatalogProductRequest {
    #[must_use]
    pub fn into_command(
        self,
        catalog_id: Option<CatalogId>,
        catalog_category_id: Option<CatalogCategoryId>,
    ) -> CreateCatalogProduct {
        CreateCatalogProduct {
            catalog_id,
            catalog_category_id,
            product_id: ProductId::from_optional(self.product_id),
            display_name: self.display_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateCatalogProductRequest {
    pub display_name: String,
    pub is_displayed: bool,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
}

impl Default for UpdateCatalogProductRequest {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            is_displayed: true,
            available_from: None,
            available_to: None,
        }
    }
}

impl UpdateCatalogProductRequest {
    #[must_use]
    pub fn into_command(
        self,
        catalog_id: Option<CatalogId>,
        catalog_category_id: Option<CatalogCategoryId>,
        catalog_product_id: Option<CatalogProductId>,
    ) -> UpdateCatalogProduct {
        UpdateCatalogProduct {
            catalog_id,
            catalog_category_id,
            catalog_product_id,
            display_name: self.display_name,
            is_displayed: self.is_displayed,
            available_from: self.available_from,
            available_to: self.available_to,
        }
    }
}

/// Body of both create and update category requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CategoryRequest {
    pub display_name: String,
}

impl CategoryRequest {
    #[must_use]
    pub fn into_create(self) -> CreateCategory {
        CreateCategory {
            display_name: self.display_name,
        }
    }

    #[must_use]
    pub fn into_update(self, category_id: Option<CategoryId>) -> UpdateCategory {
        UpdateCategory {
            category_id,
            display_name: self.display_name,
        }
    }
}

/// Body of both create and update product requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProductRequest {
    pub product_name: String,
}

impl ProductRequest {
    #[must_use]
    pub fn into_create(self) -> CreateProduct {
        CreateProduct {
            product_name: self.product_name,
        }
    }

    #[must_use]
    pub fn into_update(self, product_id: Option<ProductId>) -> UpdateProduct {
        UpdateProduct {
            product_id,
            product_name: self.product_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nil_ids_become_missing() {
        let request: CreateCatalogCategoryRequest = serde_json::from_value(serde_json::json!({
            "category_id": Uuid::nil(),
            "display_name": "Shoes"
        }))
        .unwrap();

        let command = request.into_command(None);
        assert_eq!(command.category_id, None);
        assert_eq!(command.parent_catalog_category_id, None);
        assert_eq!(command.display_name, "Shoes");
    }

    #[test]
    fn test_unparsable_ids_become_missing() {
        let request: CreateCatalogCategoryRequest = serde_json::from_value(serde_json::json!({
            "category_id": "abc",
            "display_name": "Shoes",
            "parent_catalog_category_id": 42
        }))
        .unwrap();
        let command = request.into_command(None);
        assert_eq!(command.category_id, None);
        assert_eq!(command.parent_catalog_category_id, None);

        let request: CreateCatalogProductRequest = serde_json::from_value(serde_json::json!({
            "product_id": null,
            "display_name": "Runner"
        }))
        .unwrap();
        assert_eq!(request.product_id, None);
    }

    #[test]
    fn test_category_window_is_carried_to_command() {
        let request: UpdateCatalogCategoryRequest = serde_json::from_value(serde_json::json!({
            "display_name": "Shoes",
            "available_from": "2026-06-01T00:00:00Z"
        }))
        .unwrap();

        let command = request.into_command(None, None);
        assert_eq!(
            command.available_from.map(|at| at.to_rfc3339()),
            Some("2026-06-01T00:00:00+00:00".to_string())
        );
        assert_eq!(command.available_to, None);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let request: UpdateCatalogProductRequest =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(request.display_name.is_empty());
        assert!(request.is_displayed);

        let request: CreateCatalogRequest =
            serde_json::from_value(serde_json::json!({ "display_name": "Spring" })).unwrap();
        assert!(request.into_command().categories.is_empty());
    }

    #[test]
    fn test_category_entries_keep_order() {
        let first = Uuid::now_v7();
        let second = Uuid::now_v7();
        let request: CreateCatalogRequest = serde_json::from_value(serde_json::json!({
            "display_name": "Spring",
            "categories": [
                { "category_id": first, "display_name": "Shoes" },
                { "category_id": second, "display_name": "Hats" }
            ]
        }))
        .unwrap();

        let command = request.into_command();
        assert_eq!(command.categories.len(), 2);
        assert_eq!(
            command.categories[0].category_id.map(Uuid::from),
            Some(first)
        );
        assert_eq!(command.categories[1].display_name, "Hats");
    }
}
