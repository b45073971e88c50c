//! SQLite implementations of the repositories and the read store.

mod catalog_read_store;
mod catalog_repository;
mod category_repository;
mod product_repository;

pub use catalog_read_store::SqliteCatalogReadStore;
pub use catalog_repository::SqliteCatalogRepository;
pub use category_repository::SqliteCategoryRepository;
pub use product_repository::SqliteProductRepository;

use catalog_core::{CatalogError, CatalogResult};
use std::fmt::Display;
use std::str::FromStr;

/// Parses an identifier stored as TEXT.
fn parse_id<T>(column: &str, value: &str) -> CatalogResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .parse()
        .map_err(|e| CatalogError::Internal(format!("Invalid {column} in database: {e}")))
}

fn parse_optional_id<T>(column: &str, value: Option<&str>) -> CatalogResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    value.map(|v| parse_id(column, v)).transpose()
}

/// SQLite binds integers as `i64`.
fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}
