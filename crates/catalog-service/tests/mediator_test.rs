//! End-to-end tests running commands and queries through the mediator
//! against an in-memory SQLite database.

use catalog_config::DatabaseConfig;
use catalog_core::{Mediator, PageRequest, SearchRequest};
use catalog_repository::{
    CatalogReadStore, DatabasePool, DatabasePoolInterface, SqliteCatalogReadStore,
    SqliteCatalogRepository, SqliteCategoryRepository, SqliteProductRepository,
};
use catalog_service::{
    build_mediator, CatalogCategoryEntry, CreateCatalog, CreateCatalogCategory,
    CreateCatalogProduct, CreateCategory, CreateProduct, GetCatalogCategoryDetail,
    GetCatalogCollection, GetCatalogDetail, GetCatalogProductDetail, GetCategoryDetail,
    GetProductDetail, RemoveCatalogCategory, RemoveProduct, Repositories, UpdateCatalogCategory,
    UpdateCatalogProduct,
};
use chrono::{TimeZone, Utc};
use std::sync::Arc;

async fn mediator() -> Mediator {
    let pool = DatabasePool::new(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to open in-memory database");
    pool.run_migrations().await.expect("Failed to run migrations");
    let pool: Arc<dyn DatabasePoolInterface> = Arc::new(pool);

    let repositories = Repositories {
        catalogs: Arc::new(SqliteCatalogRepository::new(pool.clone())),
        categories: Arc::new(SqliteCategoryRepository::new(pool.clone())),
        products: Arc::new(SqliteProductRepository::new(pool.clone())),
    };
    let read_store: Arc<dyn CatalogReadStore> = Arc::new(SqliteCatalogReadStore::new(pool));
    build_mediator(&repositories, &read_store)
}

fn search(term: Option<&str>, page_index: usize, page_size: usize) -> SearchRequest {
    SearchRequest::new(
        term.map(str::to_string),
        PageRequest::new(page_index, page_size),
    )
}

async fn create_catalog(mediator: &Mediator, name: &str) {
    let shoes = mediator
        .send(CreateCategory {
            display_name: format!("{name} Shoes"),
        })
        .await
        .unwrap();

    mediator
        .send(CreateCatalog {
            display_name: name.to_string(),
            categories: vec![CatalogCategoryEntry {
                category_id: Some(shoes.category_id),
                display_name: "Shoes".to_string(),
            }],
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_collection_on_empty_store() {
    let mediator = mediator().await;

    let result = mediator
        .send(GetCatalogCollection::default())
        .await
        .unwrap();

    assert_eq!(result.total_catalogs, 0);
    assert!(result.catalog_items.is_empty());
}

#[tokio::test]
async fn test_collection_paging_keeps_total() {
    let mediator = mediator().await;
    for name in ["Autumn", "Spring", "Winter"] {
        create_catalog(&mediator, name).await;
    }

    for (page_index, page_size) in [(0, 0), (1, 0), (1, usize::MAX), (usize::MAX, usize::MAX)] {
        let result = mediator
            .send(GetCatalogCollection {
                search: search(None, page_index, page_size),
            })
            .await
            .unwrap();

        assert_eq!(result.total_catalogs, 3, "page ({page_index}, {page_size})");
        for item in &result.catalog_items {
            let detail = mediator
                .send(GetCatalogDetail {
                    catalog_id: Some(item.catalog_id),
                    search: SearchRequest::default(),
                })
                .await
                .unwrap();
            assert_eq!(detail.catalog_detail.display_name, item.display_name);
        }
    }
}

#[tokio::test]
async fn test_collection_search_term() {
    let mediator = mediator().await;
    for name in ["Autumn", "Spring", "Winter"] {
        create_catalog(&mediator, name).await;
    }

    let result = mediator
        .send(GetCatalogCollection {
            search: search(Some("spr"), 1, 10),
        })
        .await
        .unwrap();

    assert_eq!(result.total_catalogs, 1);
    assert_eq!(result.catalog_items[0].display_name, "Spring");
    assert_eq!(result.catalog_items[0].total_categories, 1);
}

#[tokio::test]
async fn test_collection_search_folds_non_ascii_case() {
    let mediator = mediator().await;
    for name in ["ÉTÉ Collection", "Spring"] {
        create_catalog(&mediator, name).await;
    }

    for term in ["ÉTÉ Collection", "été", "TÉ COLL"] {
        let result = mediator
            .send(GetCatalogCollection {
                search: search(Some(term), 0, 10),
            })
            .await
            .unwrap();

        assert_eq!(result.total_catalogs, 1, "term {term}");
        assert_eq!(result.catalog_items[0].display_name, "ÉTÉ Collection");
    }
}

#[tokio::test]
async fn test_catalog_tree_flow() {
    let mediator = mediator().await;
    let shoes = mediator
        .send(CreateCategory {
            display_name: "Shoes".to_string(),
        })
        .await
        .unwrap();
    let boots = mediator
        .send(CreateCategory {
            display_name: "Boots".to_string(),
        })
        .await
        .unwrap();
    let sneaker = mediator
        .send(CreateProduct {
            product_name: "Sneaker".to_string(),
        })
        .await
        .unwrap();

    let catalog = mediator
        .send(CreateCatalog {
            display_name: "Spring".to_string(),
            categories: Vec::new(),
        })
        .await
        .unwrap();
    let root = mediator
        .send(CreateCatalogCategory {
            catalog_id: Some(catalog.catalog_id),
            category_id: Some(shoes.category_id),
            display_name: "Shoes".to_string(),
            parent_catalog_category_id: None,
            available_from: Some(Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap()),
            available_to: None,
        })
        .await
        .unwrap();
    let child = mediator
        .send(CreateCatalogCategory {
            catalog_id: Some(catalog.catalog_id),
            category_id: Some(boots.category_id),
            display_name: "Boots".to_string(),
            parent_catalog_category_id: Some(root.catalog_category_id),
            available_from: None,
            available_to: None,
        })
        .await
        .unwrap();
    let listed = mediator
        .send(CreateCatalogProduct {
            catalog_id: Some(catalog.catalog_id),
            catalog_category_id: Some(child.catalog_category_id),
            product_id: Some(sneaker.product_id),
            display_name: "Sneaker".to_string(),
        })
        .await
        .unwrap();

    mediator
        .send(UpdateCatalogProduct {
            catalog_id: Some(catalog.catalog_id),
            catalog_category_id: Some(child.catalog_category_id),
            catalog_product_id: Some(listed.catalog_product_id),
            display_name: "Trail Sneaker".to_string(),
            is_displayed: false,
            available_from: None,
            available_to: None,
        })
        .await
        .unwrap();

    let detail = mediator
        .send(GetCatalogCategoryDetail {
            catalog_id: Some(catalog.catalog_id),
            catalog_category_id: Some(child.catalog_category_id),
            search: SearchRequest::default(),
        })
        .await
        .unwrap();
    assert_eq!(
        detail.catalog_category_detail.parent_id,
        Some(root.catalog_category_id)
    );
    assert_eq!(detail.total_catalog_products, 1);
    assert_eq!(detail.catalog_category_detail.available_from, None);

    let summer_start = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
    let summer_end = Utc.with_ymd_and_hms(2026, 8, 31, 0, 0, 0).unwrap();
    mediator
        .send(UpdateCatalogCategory {
            catalog_id: Some(catalog.catalog_id),
            catalog_category_id: Some(child.catalog_category_id),
            display_name: "Summer Boots".to_string(),
            available_from: Some(summer_start),
            available_to: Some(summer_end),
        })
        .await
        .unwrap();

    let detail = mediator
        .send(GetCatalogCategoryDetail {
            catalog_id: Some(catalog.catalog_id),
            catalog_category_id: Some(child.catalog_category_id),
            search: SearchRequest::default(),
        })
        .await
        .unwrap();
    assert_eq!(detail.catalog_category_detail.display_name, "Summer Boots");
    assert_eq!(detail.catalog_category_detail.available_from, Some(summer_start));
    assert_eq!(detail.catalog_category_detail.available_to, Some(summer_end));

    let tree = mediator
        .send(GetCatalogDetail {
            catalog_id: Some(catalog.catalog_id),
            search: SearchRequest::default(),
        })
        .await
        .unwrap();
    let root_item = tree
        .catalog_categories
        .iter()
        .find(|item| item.catalog_category_id == root.catalog_category_id)
        .unwrap();
    assert_eq!(
        root_item.available_from,
        Some(Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap())
    );
    assert_eq!(root_item.available_to, None);

    let product = mediator
        .send(GetCatalogProductDetail {
            catalog_id: Some(catalog.catalog_id),
            catalog_category_id: Some(child.catalog_category_id),
            catalog_product_id: Some(listed.catalog_product_id),
        })
        .await
        .unwrap();
    assert_eq!(product.catalog_product_detail.display_name, "Trail Sneaker");
    assert_eq!(product.catalog_product_detail.product_name, "Sneaker");
    assert!(!product.catalog_product_detail.is_displayed);

    let placements = mediator
        .send(GetProductDetail {
            product_id: Some(sneaker.product_id),
            search: SearchRequest::default(),
        })
        .await
        .unwrap();
    assert_eq!(placements.total_catalog_categories, 1);

    mediator
        .send(RemoveCatalogCategory {
            catalog_id: Some(catalog.catalog_id),
            catalog_category_id: Some(root.catalog_category_id),
        })
        .await
        .unwrap();

    let detail = mediator
        .send(GetCatalogDetail {
            catalog_id: Some(catalog.catalog_id),
            search: SearchRequest::default(),
        })
        .await
        .unwrap();
    assert_eq!(detail.total_catalog_categories, 0);

    let err = mediator
        .send(GetCatalogProductDetail {
            catalog_id: Some(catalog.catalog_id),
            catalog_category_id: Some(child.catalog_category_id),
            catalog_product_id: Some(listed.catalog_product_id),
        })
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);

    let category = mediator
        .send(GetCategoryDetail {
            category_id: Some(shoes.category_id),
            search: SearchRequest::default(),
        })
        .await
        .unwrap();
    assert_eq!(category.total_catalogs, 0);
}

#[tokio::test]
async fn test_removed_product_is_validation_failure_on_second_remove() {
    let mediator = mediator().await;
    let product = mediator
        .send(CreateProduct {
            product_name: "Sneaker".to_string(),
        })
        .await
        .unwrap();

    let remove = RemoveProduct {
        product_id: Some(product.product_id),
    };
    mediator.send(remove).await.unwrap();

    let err = mediator.send(remove).await.unwrap_err();
    let failures = err.validation_failures().unwrap();
    assert_eq!(
        failures.errors()[0].message,
        format!("Product#{} could not be found.", product.product_id)
    );
}

#[tokio::test]
async fn test_remove_catalog_category_validation_fields() {
    let mediator = mediator().await;

    let err = mediator
        .send(RemoveCatalogCategory {
            catalog_id: None,
            catalog_category_id: None,
        })
        .await
        .unwrap_err();

    let failures = err.validation_failures().unwrap();
    assert!(failures.has_error_for("catalog_id"));
    assert!(failures.has_error_for("catalog_category_id"));
}
