//! # Catalog REST
//!
//! REST API layer using Axum for the product catalog.
//! Every endpoint turns its path, query and body into a command or query and
//! sends it through the mediator; results come back in an [`ApiResponse`]
//! envelope.
//!
//! [`ApiResponse`]: responses::ApiResponse

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
