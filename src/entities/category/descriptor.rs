//! Entity descriptor for Category

use super::handlers::{
    create_category, delete_category, get_category, list_categories, update_category,
};
use crate::server::{AdminState, EntityDescriptor, Resource};
use axum::{Router, routing::get};

/// Descriptor for the Category entity
pub struct CategoryDescriptor {
    pub state: AdminState,
}

impl CategoryDescriptor {
    pub fn new(state: AdminState) -> Self {
        Self { state }
    }
}

impl EntityDescriptor for CategoryDescriptor {
    fn resource(&self) -> Resource {
        Resource::Category
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/categories", get(list_categories).post(create_category))
            .route(
                "/categories/{id}",
                get(get_category).put(update_category).delete(delete_category),
            )
            .with_state(self.state.clone())
    }
}
