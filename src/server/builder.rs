//! ServerBuilder for fluent API to build HTTP servers

use super::AdminState;
use super::entity_registry::{EntityDescriptor, EntityRegistry};
use super::rest::RestExposure;
use crate::entities::{
    category::CategoryDescriptor, order::OrderDescriptor, product::ProductDescriptor,
};
use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builder for creating the admin HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_state(AdminState::in_memory())
///     .register_resources()?
///     .build()?;
/// ```
pub struct ServerBuilder {
    state: Option<AdminState>,
    entity_registry: EntityRegistry,
    custom_routes: Vec<Router>,
    permissive_cors: bool,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            state: None,
            entity_registry: EntityRegistry::new(),
            custom_routes: Vec::new(),
            permissive_cors: false,
        }
    }

    /// Set the application state (required)
    pub fn with_state(mut self, state: AdminState) -> Self {
        self.state = Some(state);
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Allow cross-origin requests from any origin, for a browser UI served
    /// from another host
    pub fn with_permissive_cors(mut self, enabled: bool) -> Self {
        self.permissive_cors = enabled;
        self
    }

    /// Register a single resource descriptor
    ///
    /// A later descriptor for the same resource replaces the earlier one.
    pub fn register(mut self, descriptor: impl EntityDescriptor + 'static) -> Self {
        if let Some(previous) = self.entity_registry.register(Box::new(descriptor)) {
            tracing::warn!(resource = %previous.resource(), "replacing registered routes");
        }
        self
    }

    /// Register the order, product and category resources
    ///
    /// Requires the state to be set first.
    pub fn register_resources(self) -> Result<Self> {
        let state = self
            .state
            .clone()
            .ok_or_else(|| anyhow::anyhow!("AdminState is required. Call .with_state()"))?;

        Ok(self
            .register(OrderDescriptor::new(state.clone()))
            .register(ProductDescriptor::new(state.clone()))
            .register(CategoryDescriptor::new(state)))
    }

    /// Build the final router with tracing and CORS layers
    pub fn build(mut self) -> Result<Router> {
        let state = self
            .state
            .take()
            .ok_or_else(|| anyhow::anyhow!("AdminState is required. Call .with_state()"))?;

        let missing = self.entity_registry.missing();
        if !missing.is_empty() {
            tracing::warn!(?missing, "serving without some resources");
        }
        tracing::debug!(collections = ?self.entity_registry.collections(), "building router");

        let mut app = RestExposure::build_router(state, &self.entity_registry, self.custom_routes);

        if self.permissive_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for a shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
