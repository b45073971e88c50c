//! Result type aliases for the catalog.

use crate::CatalogError;

/// A specialized `Result` type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// A boxed future returning a `CatalogResult`.
pub type BoxFuture<'a, T> =
    std::pin::Pin<Box<dyn std::future::Future<Output = CatalogResult<T>> + Send + 'a>>;
