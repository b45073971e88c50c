//! # Catalog Server Library
//!
//! Dependency injection wiring and startup for the product catalog server.

pub mod app;
pub mod di;
pub mod startup;

pub use app::App;
pub use di::{build_module, CatalogModule};
