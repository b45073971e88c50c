//! Typed ID wrappers for catalog aggregates and their children.
//!
//! Every identity wraps a UUID that is never nil: the nil UUID is what an
//! unset identifier looks like on the wire, so it is rejected at every entry
//! point (parsing, conversion and deserialization).

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Reasons an identifier could not be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// The UUID was nil.
    #[error("identifier is empty")]
    Empty,
    /// The text was not a UUID.
    #[error("identifier is not a valid UUID")]
    Malformed,
}

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new time-ordered identifier.
            #[must_use]
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Parses an identifier from its hyphenated text form.
            pub fn parse(s: &str) -> Result<Self, IdentityError> {
                let uuid = Uuid::parse_str(s).map_err(|_| IdentityError::Malformed)?;
                Self::try_from(uuid)
            }

            /// Converts an optional raw UUID, treating nil as absent.
            #[must_use]
            pub fn from_optional(value: Option<Uuid>) -> Option<Self> {
                value.and_then(|uuid| Self::try_from(uuid).ok())
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl TryFrom<Uuid> for $name {
            type Error = IdentityError;

            fn try_from(uuid: Uuid) -> Result<Self, Self::Error> {
                if uuid.is_nil() {
                    Err(IdentityError::Empty)
                } else {
                    Ok(Self(uuid))
                }
            }
        }

        impl FromStr for $name {
            type Err = IdentityError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let uuid = Uuid::deserialize(deserializer)?;
                Self::try_from(uuid).map_err(serde::de::Error::custom)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

typed_id!(
    /// Identity of a `Catalog` aggregate.
    CatalogId
);
typed_id!(
    /// Identity of a category placed inside a catalog.
    CatalogCategoryId
);
typed_id!(
    /// Identity of a product placed inside a catalog category.
    CatalogProductId
);
typed_id!(
    /// Identity of a `Category` aggregate.
    CategoryId
);
typed_id!(
    /// Identity of a `Product` aggregate.
    ProductId
);
