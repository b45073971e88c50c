//! # Catalog Config
//!
//! Configuration management for the product catalog.
//! Supports layered configuration from files and environment variables,
//! validation of every value at startup, and runtime refresh.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
