//! # Catalog Core
//!
//! Core types, traits, and error definitions for the product catalog.
//! This crate provides the foundational abstractions shared by every layer:
//! typed identities, paging, validation failures, the repository seam and
//! the mediator pipeline that commands and queries travel through.

pub mod error;
pub mod id;
pub mod mediator;
pub mod pagination;
pub mod result;
pub mod traits;
pub mod validation;

pub use error::*;
pub use id::*;
pub use mediator::*;
pub use pagination::*;
pub use result::*;
pub use traits::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
