//! Domain rule violations.

use catalog_core::CatalogError;
use thiserror::Error;

/// Raised when an operation would break an aggregate invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// An argument failed a domain rule.
    #[error("{0}")]
    InvalidArgument(String),

    /// The aggregate already contains the item.
    #[error("{0}")]
    Duplicate(String),

    /// A child entity is not part of the aggregate.
    #[error("{entity}#{id} could not be found")]
    NotFound { entity: &'static str, id: String },
}

impl DomainError {
    #[must_use]
    pub fn not_found<T: ToString>(entity: &'static str, id: T) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Result of an operation on an aggregate.
pub type DomainResult<T> = Result<T, DomainError>;

impl From<DomainError> for CatalogError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity, id } => Self::NotFound {
                resource_type: entity,
                id,
            },
            DomainError::InvalidArgument(message) | DomainError::Duplicate(message) => {
                Self::BusinessRule(message)
            }
        }
    }
}
