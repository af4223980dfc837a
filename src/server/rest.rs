//! REST router assembly
//!
//! Merges the built-in routes (health, dashboard) with the CRUD routes of
//! every registered resource and any custom routes.

use super::AdminState;
use super::dashboard::dashboard;
use super::entity_registry::EntityRegistry;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

pub struct RestExposure;

impl RestExposure {
    /// Build the REST router
    pub fn build_router(
        state: AdminState,
        registry: &EntityRegistry,
        custom_routes: Vec<Router>,
    ) -> Router {
        let mut app = Self::health_routes()
            .merge(Self::dashboard_routes(state))
            .merge(registry.build_routes());

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        app
    }

    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    fn dashboard_routes(state: AdminState) -> Router {
        Router::new()
            .route("/dashboard", get(dashboard))
            .with_state(state)
    }

    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": env!("CARGO_PKG_NAME")
        }))
    }
}
