//! Custom Axum extractors.

mod ids;
mod json;
mod pagination;

pub use ids::*;
pub use json::*;
pub use pagination::*;
