//! HTTP server for the admin API
//!
//! [`ServerBuilder`] assembles the health and dashboard routes with the CRUD
//! routes of every registered resource, then serves them with graceful
//! shutdown.

pub mod builder;
pub mod dashboard;
pub mod entity_registry;
pub mod rest;
pub mod state;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry, Resource};
pub use state::AdminState;
