//! REST API controllers.

pub mod catalog_controller;
pub mod category_controller;
pub mod health_controller;
pub mod product_controller;

pub use health_controller::*;
