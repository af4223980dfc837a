//! Entity descriptor for Order

use super::handlers::{create_order, delete_order, get_order, list_orders, update_order_status};
use crate::server::{AdminState, EntityDescriptor, Resource};
use axum::{
    Router,
    routing::{get, patch},
};

/// Descriptor for the Order entity
pub struct OrderDescriptor {
    pub state: AdminState,
}

impl OrderDescriptor {
    pub fn new(state: AdminState) -> Self {
        Self { state }
    }
}

impl EntityDescriptor for OrderDescriptor {
    fn resource(&self) -> Resource {
        Resource::Order
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/orders", get(list_orders).post(create_order))
            .route("/orders/{id}", get(get_order).delete(delete_order))
            .route("/orders/{id}/status", patch(update_order_status))
            .with_state(self.state.clone())
    }
}
