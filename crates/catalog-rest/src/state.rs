//! Application state for Axum handlers.

use catalog_core::Mediator;
use catalog_repository::{
    CatalogReadStore, CatalogRepository, CategoryRepository, DatabasePoolInterface,
    ProductRepository,
};
use catalog_service::{build_mediator, Repositories};
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub mediator: Arc<Mediator>,
    pub pool: Arc<dyn DatabasePoolInterface>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(mediator: Arc<Mediator>, pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { mediator, pool }
    }

    /// Resolves the repositories and read store from a Shaku module and
    /// builds the mediator over them.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module
            + HasComponent<dyn DatabasePoolInterface>
            + HasComponent<dyn CatalogRepository>
            + HasComponent<dyn CategoryRepository>
            + HasComponent<dyn ProductRepository>
            + HasComponent<dyn CatalogReadStore>,
    {
        let repositories = Repositories {
            catalogs: module.resolve(),
            categories: module.resolve(),
            products: module.resolve(),
        };
        let read_store: Arc<dyn CatalogReadStore> = module.resolve();
        let mediator = build_mediator(&repositories, &read_store);

        Self::new(Arc::new(mediator), module.resolve())
    }
}
