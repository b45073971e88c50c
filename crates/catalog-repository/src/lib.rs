//! # Catalog Repository
//!
//! Write side and read side of the catalog's data access:
//!
//! ```text
//! Command handlers                    Query handlers
//!   ↓  Arc<dyn CatalogRepository>       ↓  Arc<dyn CatalogReadStore>
//! SqliteCatalogRepository            SqliteCatalogReadStore
//!   (whole aggregates)                 (flattened read models)
//!   ↓                                  ↓
//!            Arc<dyn DatabasePoolInterface>  →  SQLite
//! ```
//!
//! Repositories only load and store complete aggregates. The read store
//! answers queries with joins and counts computed by the database.

pub mod pool;
pub mod read_models;
pub mod sqlite;
pub mod traits;

pub use pool::*;
pub use read_models::*;
pub use sqlite::*;
pub use traits::*;
