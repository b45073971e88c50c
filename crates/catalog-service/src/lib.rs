//! # Catalog Service
//!
//! Application layer of the product catalog: commands and queries, their
//! validators and handlers, and the mediator that routes them.
//!
//! ```text
//! REST ─► Mediator ─► EndRequestBehavior ─► ValidationBehavior ─► Handler
//!                                                                  │
//!                              CatalogRepository / CatalogReadStore ◄┘
//! ```

mod checks;
pub mod commands;
pub mod dto;
pub mod mediator;
pub mod queries;

#[cfg(test)]
mod testing;

pub use checks::{FieldRulesValidator, RequiredIds, RequiredIdsValidator};
pub use commands::*;
pub use dto::*;
pub use mediator::{build_mediator, Repositories};
pub use queries::*;
