//! Core traits for the domain and persistence seams.

use crate::CatalogResult;
use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait for aggregate roots.
///
/// An aggregate root is the entry point to an aggregate, a cluster of domain
/// objects that is loaded, validated and persisted as a single unit.
pub trait AggregateRoot: Clone + Debug + Send + Sync + 'static {
    /// The aggregate's identity type.
    type Id: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static;

    /// Human-readable aggregate name used in logs and not-found errors.
    const NAME: &'static str;

    /// Returns the aggregate's unique identifier.
    fn id(&self) -> Self::Id;
}

/// Base repository trait for aggregate persistence.
///
/// Repositories always load and store whole aggregates; children of an
/// aggregate are never persisted on their own.
#[async_trait]
pub trait Repository<A: AggregateRoot>: Send + Sync {
    /// Loads the aggregate with all of its children.
    async fn find_by_id(&self, id: A::Id) -> CatalogResult<Option<A>>;

    /// Checks if an aggregate exists by its ID.
    async fn exists(&self, id: A::Id) -> CatalogResult<bool>;

    /// Persists a new aggregate.
    async fn add(&self, aggregate: &A) -> CatalogResult<()>;

    /// Persists the current state of an existing aggregate.
    async fn update(&self, aggregate: &A) -> CatalogResult<()>;

    /// Deletes an aggregate by its ID.
    async fn remove(&self, id: A::Id) -> CatalogResult<bool>;
}
