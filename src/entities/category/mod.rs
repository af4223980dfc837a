//! Category entity module

pub mod descriptor;
pub mod handlers;
pub mod model;

pub use descriptor::CategoryDescriptor;
pub use handlers::CategoryView;
pub use model::Category;
