//! Queries: read-only requests answered from the read store.
//!
//! Detail queries only need their identifiers present; a detail whose
//! aggregate no longer exists is reported as not found.

mod catalog;
mod category;
mod product;

pub use catalog::*;
pub use category::*;
pub use product::*;
