//! Product entity module

pub mod descriptor;
pub mod handlers;
pub mod model;

pub use descriptor::ProductDescriptor;
pub use handlers::{ProductView, UNKNOWN_CATEGORY};
pub use model::Product;
