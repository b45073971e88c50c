//! Common test infrastructure for database integration tests.

#![allow(dead_code)]

use catalog_config::DatabaseConfig;
use catalog_core::Repository;
use catalog_domain::{Category, Product};
use catalog_repository::{
    DatabasePool, DatabasePoolInterface, SqliteCategoryRepository, SqliteProductRepository,
};
use std::sync::Arc;

/// In-memory SQLite database with the schema applied.
///
/// Each instance owns a private database that disappears when dropped.
pub struct TestDatabase {
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a fresh database and runs migrations.
    pub async fn new() -> Self {
        let pool = DatabasePool::new(&DatabaseConfig::in_memory())
            .await
            .expect("Failed to open in-memory database");

        pool.run_migrations()
            .await
            .expect("Failed to run migrations");

        Self {
            pool: Arc::new(pool),
        }
    }

    /// Returns the pool as the injected interface.
    pub fn pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.pool.clone()
    }

    /// Stores a new category with the given name.
    pub async fn seed_category(&self, name: &str) -> Category {
        let category = Category::create(name).expect("valid category");
        SqliteCategoryRepository::new(self.pool())
            .add(&category)
            .await
            .expect("Failed to seed category");
        category
    }

    /// Stores a new product with the given name.
    pub async fn seed_product(&self, name: &str) -> Product {
        let product = Product::create(name).expect("valid product");
        SqliteProductRepository::new(self.pool())
            .add(&product)
            .await
            .expect("Failed to seed product");
        product
    }
}
