//! Data Transfer Objects for the API layer.

mod requests;
mod responses;

pub use requests::*;
pub use responses::*;
