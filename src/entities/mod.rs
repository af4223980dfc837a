//! Shop records and their HTTP resources

pub mod category;
pub mod order;
pub mod product;
pub mod support;

pub use category::{Category, CategoryDescriptor, CategoryView};
pub use order::{LineItem, Order, OrderDescriptor, OrderView};
pub use product::{Product, ProductDescriptor, ProductView};
