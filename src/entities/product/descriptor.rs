//! Entity descriptor for Product

use super::handlers::{create_product, delete_product, get_product, list_products, update_product};
use crate::server::{AdminState, EntityDescriptor, Resource};
use axum::{Router, routing::get};

/// Descriptor for the Product entity
pub struct ProductDescriptor {
    pub state: AdminState,
}

impl ProductDescriptor {
    pub fn new(state: AdminState) -> Self {
        Self { state }
    }
}

impl EntityDescriptor for ProductDescriptor {
    fn resource(&self) -> Resource {
        Resource::Product
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/products", get(list_products).post(create_product))
            .route(
                "/products/{id}",
                get(get_product).put(update_product).delete(delete_product),
            )
            .with_state(self.state.clone())
    }
}
