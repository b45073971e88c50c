//! In-memory repository doubles for handler and validator tests.

use async_trait::async_trait;
use catalog_core::{AggregateRoot, CatalogError, CatalogResult, Repository};
use catalog_domain::{Catalog, Category, Product};
use catalog_repository::{CatalogRepository, CategoryRepository, ProductRepository};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory repository keeping aggregates in a map.
pub struct InMemoryRepository<A: AggregateRoot> {
    items: Mutex<HashMap<A::Id, A>>,
    updates: AtomicUsize,
}

impl<A: AggregateRoot> InMemoryRepository<A> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
            updates: AtomicUsize::new(0),
        }
    }

    pub fn with(items: Vec<A>) -> Self {
        let repo = Self::new();
        for item in items {
            repo.items.lock().unwrap().insert(item.id(), item);
        }
        repo
    }

    pub fn get(&self, id: A::Id) -> Option<A> {
        self.items.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    /// Number of successful `update` calls.
    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<A: AggregateRoot> Repository<A> for InMemoryRepository<A> {
    async fn find_by_id(&self, id: A::Id) -> CatalogResult<Option<A>> {
        Ok(self.get(id))
    }

    async fn exists(&self, id: A::Id) -> CatalogResult<bool> {
        Ok(self.items.lock().unwrap().contains_key(&id))
    }

    async fn add(&self, aggregate: &A) -> CatalogResult<()> {
        let mut items = self.items.lock().unwrap();
        if items.contains_key(&aggregate.id()) {
            return Err(CatalogError::conflict(format!("{}#{} exists", A::NAME, aggregate.id())));
        }
        items.insert(aggregate.id(), aggregate.clone());
        Ok(())
    }

    async fn update(&self, aggregate: &A) -> CatalogResult<()> {
        let mut items = self.items.lock().unwrap();
        if !items.contains_key(&aggregate.id()) {
            return Err(CatalogError::not_found(A::NAME, aggregate.id()));
        }
        items.insert(aggregate.id(), aggregate.clone());
        self.updates.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove(&self, id: A::Id) -> CatalogResult<bool> {
        Ok(self.items.lock().unwrap().remove(&id).is_some())
    }
}

impl CatalogRepository for InMemoryRepository<Catalog> {}
impl CategoryRepository for InMemoryRepository<Category> {}
impl ProductRepository for InMemoryRepository<Product> {}

pub type InMemoryCatalogRepository = InMemoryRepository<Catalog>;
pub type InMemoryCategoryRepository = InMemoryRepository<Category>;
pub type InMemoryProductRepository = InMemoryRepository<Product>;
