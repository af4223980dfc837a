//! Order entity module

pub mod descriptor;
pub mod handlers;
pub mod model;

pub use descriptor::OrderDescriptor;
pub use handlers::OrderView;
pub use model::{LineItem, ORDER_STATUSES, Order};
