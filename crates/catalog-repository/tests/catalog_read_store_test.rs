//! Integration tests for the SQLite read store.

mod common;

use catalog_core::{
    CatalogCategoryId, CatalogId, CategoryId, PageRequest, ProductId, Repository, SearchRequest,
};
use catalog_domain::Catalog;
use catalog_repository::{CatalogReadStore, SqliteCatalogReadStore, SqliteCatalogRepository};
use chrono::{TimeZone, Utc};
use common::TestDatabase;

fn search(term: Option<&str>, page_index: usize, page_size: usize) -> SearchRequest {
    SearchRequest::new(
        term.map(str::to_string),
        PageRequest::new(page_index, page_size),
    )
}

/// Seeds a catalog with a root category, a child category and one product.
async fn seed_catalog(db: &TestDatabase, name: &str) -> Catalog {
    let shoes = db.seed_category(&format!("{name} Shoes")).await;
    let boots = db.seed_category(&format!("{name} Boots")).await;
    let sneaker = db.seed_product(&format!("{name} Sneaker")).await;

    let mut catalog = Catalog::create(name).unwrap();
    let root_id = catalog
        .add_category(shoes.category_id(), "Shoes", None)
        .unwrap()
        .catalog_category_id();
    catalog
        .add_category(boots.category_id(), "Boots", Some(root_id))
        .unwrap()
        .create_catalog_product(sneaker.product_id(), "Sneaker")
        .unwrap();

    SqliteCatalogRepository::new(db.pool())
        .add(&catalog)
        .await
        .expect("Failed to seed catalog");
    catalog
}

#[tokio::test]
async fn test_catalog_collection_on_empty_store() {
    let db = TestDatabase::new().await;
    let store = SqliteCatalogReadStore::new(db.pool());

    let page = store.catalog_collection(&search(None, 1, 10)).await.unwrap();
    assert_eq!(page.total_elements(), 0);
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_catalog_collection_counts_and_orders() {
    let db = TestDatabase::new().await;
    let store = SqliteCatalogReadStore::new(db.pool());
    seed_catalog(&db, "Winter").await;
    seed_catalog(&db, "Autumn").await;

    let page = store.catalog_collection(&search(None, 1, 10)).await.unwrap();
    assert_eq!(page.total_elements(), 2);
    assert_eq!(page.content[0].display_name, "Autumn");
    assert_eq!(page.content[1].display_name, "Winter");
    assert!(page.content.iter().all(|c| c.total_categories == 2));
}

#[tokio::test]
async fn test_catalog_collection_search_is_case_insensitive() {
    let db = TestDatabase::new().await;
    let store = SqliteCatalogReadStore::new(db.pool());
    let spring = seed_catalog(&db, "Spring Sale").await;
    seed_catalog(&db, "Winter").await;

    let page = store
        .catalog_collection(&search(Some("SPRING"), 1, 10))
        .await
        .unwrap();
    assert_eq!(page.total_elements(), 1);
    assert_eq!(page.content[0].catalog_id, spring.catalog_id());
}

#[tokio::test]
async fn test_search_folds_non_ascii_names() {
    let db = TestDatabase::new().await;
    let store = SqliteCatalogReadStore::new(db.pool());
    let summer = seed_catalog(&db, "ÉTÉ Collection").await;
    seed_catalog(&db, "Winter").await;

    for term in ["ÉTÉ Collection", "été collection", "Été"] {
        let page = store
            .catalog_collection(&search(Some(term), 1, 10))
            .await
            .unwrap();
        assert_eq!(page.total_elements(), 1, "term {term}");
        assert_eq!(page.content[0].catalog_id, summer.catalog_id());
    }

    let categories = store
        .category_collection(&search(Some("été collection shoes"), 1, 10))
        .await
        .unwrap();
    assert_eq!(categories.total_elements(), 1);

    let products = store
        .product_collection(&search(Some("ÉTÉ COLLECTION SNEAKER"), 1, 10))
        .await
        .unwrap();
    assert_eq!(products.total_elements(), 1);
}

#[tokio::test]
async fn test_search_wildcards_are_literal() {
    let db = TestDatabase::new().await;
    let store = SqliteCatalogReadStore::new(db.pool());
    seed_catalog(&db, "50% off").await;
    seed_catalog(&db, "500 items").await;

    let page = store
        .catalog_collection(&search(Some("50%"), 1, 10))
        .await
        .unwrap();
    assert_eq!(page.total_elements(), 1);
    assert_eq!(page.content[0].display_name, "50% off");
}

#[tokio::test]
async fn test_paging_keeps_total_for_any_request() {
    let db = TestDatabase::new().await;
    let store = SqliteCatalogReadStore::new(db.pool());
    let mut ids = Vec::new();
    for name in ["A", "B", "C"] {
        ids.push(seed_catalog(&db, name).await.catalog_id());
    }

    for (index, size) in [(0, 0), (1, 0), (1, usize::MAX), (usize::MAX, usize::MAX)] {
        let page = store
            .catalog_collection(&search(None, index, size))
            .await
            .unwrap();
        assert_eq!(page.total_elements(), 3, "page ({index}, {size})");
        assert!(page.content.iter().all(|c| ids.contains(&c.catalog_id)));
    }
}

#[tokio::test]
async fn test_catalog_detail() {
    let db = TestDatabase::new().await;
    let store = SqliteCatalogReadStore::new(db.pool());
    let catalog = seed_catalog(&db, "Spring").await;

    let detail = store
        .catalog_detail(catalog.catalog_id(), &search(None, 1, 10))
        .await
        .unwrap()
        .expect("Catalog detail not found");
    assert_eq!(detail.display_name, "Spring");
    assert_eq!(detail.categories.total_elements(), 2);

    let root = &detail.categories.content[0];
    let child = &detail.categories.content[1];
    assert_eq!(root.parent_id, None);
    assert_eq!(child.parent_id, Some(root.catalog_category_id));
    assert_eq!(child.total_products, 1);
    assert_eq!(root.available_from, None);
    assert_eq!(root.available_to, None);

    let filtered = store
        .catalog_detail(catalog.catalog_id(), &search(Some("boot"), 1, 10))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(filtered.categories.total_elements(), 1);

    assert!(store
        .catalog_detail(CatalogId::new(), &search(None, 1, 10))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_catalog_category_window_is_exposed() {
    let db = TestDatabase::new().await;
    let store = SqliteCatalogReadStore::new(db.pool());
    let repo = SqliteCatalogRepository::new(db.pool());
    let mut catalog = seed_catalog(&db, "Spring").await;
    let from = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2026, 5, 31, 0, 0, 0).unwrap();
    let root_id = catalog.categories()[0].catalog_category_id();
    catalog
        .find_category_mut(root_id)
        .unwrap()
        .set_availability(Some(from), Some(to))
        .unwrap();
    repo.update(&catalog).await.unwrap();

    let detail = store
        .catalog_detail(catalog.catalog_id(), &search(None, 1, 10))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.categories.content[0].available_from, Some(from));
    assert_eq!(detail.categories.content[0].available_to, Some(to));
    assert_eq!(detail.categories.content[1].available_from, None);

    let category = store
        .catalog_category_detail(catalog.catalog_id(), root_id, &search(None, 1, 10))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(category.available_from, Some(from));
    assert_eq!(category.available_to, Some(to));
}

#[tokio::test]
async fn test_catalog_category_and_product_detail() {
    let db = TestDatabase::new().await;
    let store = SqliteCatalogReadStore::new(db.pool());
    let catalog = seed_catalog(&db, "Spring").await;
    let child = &catalog.categories()[1];
    let product = &child.products()[0];

    let detail = store
        .catalog_category_detail(
            catalog.catalog_id(),
            child.catalog_category_id(),
            &search(None, 1, 10),
        )
        .await
        .unwrap()
        .expect("Catalog category not found");
    assert_eq!(detail.catalog_name, "Spring");
    assert_eq!(detail.display_name, "Boots");
    assert_eq!(detail.products.total_elements(), 1);
    assert!(detail.products.content[0].is_displayed);

    // A category is only found through its own catalog.
    assert!(store
        .catalog_category_detail(
            CatalogId::new(),
            child.catalog_category_id(),
            &search(None, 1, 10)
        )
        .await
        .unwrap()
        .is_none());

    let product_detail = store
        .catalog_product_detail(
            catalog.catalog_id(),
            child.catalog_category_id(),
            product.catalog_product_id(),
        )
        .await
        .unwrap()
        .expect("Catalog product not found");
    assert_eq!(product_detail.product_name, "Spring Sneaker");
    assert_eq!(product_detail.display_name, "Sneaker");
    assert_eq!(product_detail.catalog_category_name, "Boots");

    assert!(store
        .catalog_product_detail(
            catalog.catalog_id(),
            CatalogCategoryId::new(),
            product.catalog_product_id(),
        )
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_category_collection_and_detail() {
    let db = TestDatabase::new().await;
    let store = SqliteCatalogReadStore::new(db.pool());
    let catalog = seed_catalog(&db, "Spring").await;
    let unused = db.seed_category("Unused").await;
    let placed = catalog.categories()[0].category_id();

    let page = store.category_collection(&search(None, 1, 10)).await.unwrap();
    assert_eq!(page.total_elements(), 3);
    let unused_summary = page
        .content
        .iter()
        .find(|c| c.category_id == unused.category_id())
        .unwrap();
    assert_eq!(unused_summary.total_catalogs, 0);

    let detail = store
        .category_detail(placed, &search(None, 1, 10))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.catalogs.total_elements(), 1);
    assert_eq!(detail.catalogs.content[0].catalog_id, catalog.catalog_id());

    assert!(store
        .category_detail(CategoryId::new(), &search(None, 1, 10))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_product_collection_and_detail() {
    let db = TestDatabase::new().await;
    let store = SqliteCatalogReadStore::new(db.pool());
    let catalog = seed_catalog(&db, "Spring").await;
    let product_id = catalog.categories()[1].products()[0].product_id();

    let page = store
        .product_collection(&search(Some("sneaker"), 1, 10))
        .await
        .unwrap();
    assert_eq!(page.total_elements(), 1);
    assert_eq!(page.content[0].total_catalog_categories, 1);

    let detail = store
        .product_detail(product_id, &search(None, 1, 10))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.product_name, "Spring Sneaker");
    assert_eq!(detail.catalog_categories.total_elements(), 1);
    assert_eq!(detail.catalog_categories.content[0].catalog_name, "Spring");

    assert!(store
        .product_detail(ProductId::new(), &search(None, 1, 10))
        .await
        .unwrap()
        .is_none());
}
