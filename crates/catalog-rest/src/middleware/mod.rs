//! HTTP middleware.

mod logging;
mod trace_id;

pub use logging::*;
pub use trace_id::*;
