//! The shop's HTTP resources and the descriptors that mount them
//!
//! Three collections are served: orders, products and categories. Each one is
//! mounted by an [`EntityDescriptor`], and the [`EntityRegistry`] holds at most
//! one descriptor per [`Resource`].

use crate::core::Record;
use crate::entities::{Category, Order, Product};
use axum::Router;
use std::collections::BTreeMap;
use std::fmt;

/// A collection served over HTTP
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Resource {
    Order,
    Product,
    Category,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Order, Resource::Product, Resource::Category];

    /// Route prefix, identical to the record store collection name
    pub fn collection(self) -> &'static str {
        match self {
            Resource::Order => Order::collection(),
            Resource::Product => Product::collection(),
            Resource::Category => Category::collection(),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

/// Mounts the routes of one resource
pub trait EntityDescriptor: Send + Sync {
    /// The resource these routes serve
    fn resource(&self) -> Resource;

    /// Routes under `/{collection}`, already bound to their state
    fn routes(&self) -> Router;
}

/// Descriptors keyed by resource
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: BTreeMap<Resource, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor, returning the one it replaces
    pub fn register(
        &mut self,
        descriptor: Box<dyn EntityDescriptor>,
    ) -> Option<Box<dyn EntityDescriptor>> {
        self.descriptors.insert(descriptor.resource(), descriptor)
    }

    /// Resources that have no descriptor yet
    pub fn missing(&self) -> Vec<Resource> {
        Resource::ALL
            .into_iter()
            .filter(|r| !self.descriptors.contains_key(r))
            .collect()
    }

    /// Collections with a registered descriptor, in [`Resource`] order
    pub fn collections(&self) -> Vec<&'static str> {
        self.descriptors.keys().map(|r| r.collection()).collect()
    }

    /// Merge the routes of every registered resource
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, d| router.merge(d.routes()))
    }
}
