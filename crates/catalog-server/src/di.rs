//! Dependency injection module using Shaku.

use catalog_config::DatabaseConfig;
use catalog_core::CatalogResult;
use catalog_repository::{
    create_pool, DatabasePool, DatabasePoolInterface, DatabasePoolParameters,
    SqliteCatalogReadStore, SqliteCatalogRepository, SqliteCategoryRepository,
    SqliteProductRepository,
};
use shaku::module;
use std::sync::Arc;

// Single-process module: the SQLite pool, the aggregate repositories and
// the read store. Services are assembled by the mediator on top of these.
module! {
    pub CatalogModule {
        components = [
            DatabasePool,
            SqliteCatalogRepository,
            SqliteCategoryRepository,
            SqliteProductRepository,
            SqliteCatalogReadStore,
        ],
        providers = [],
    }
}

/// Connects to the database and builds the module around the pool.
///
/// Migrations run here when `run_migrations` is set.
pub async fn build_module(db_config: &DatabaseConfig) -> CatalogResult<Arc<CatalogModule>> {
    let db_pool = create_pool(db_config).await?;

    let module = CatalogModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .build();

    Ok(Arc::new(module))
}
