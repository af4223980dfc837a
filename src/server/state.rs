//! Shared application state handed to every handler

use crate::config::{AdminConfig, SeedData, StoreBackend};
use crate::core::RecordStore;
use crate::entities::{category::Category, order::Order, product::Product};
use crate::storage::InMemoryRecordStore;
use anyhow::Result;
use std::sync::Arc;

/// Record stores for each collection plus dashboard settings
#[derive(Clone)]
pub struct AdminState {
    pub orders: Arc<dyn RecordStore<Order>>,
    pub products: Arc<dyn RecordStore<Product>>,
    pub categories: Arc<dyn RecordStore<Category>>,
    /// How many orders the dashboard lists
    pub recent_orders: usize,
}

impl AdminState {
    /// Build a state around arbitrary stores
    pub fn new(
        orders: Arc<dyn RecordStore<Order>>,
        products: Arc<dyn RecordStore<Product>>,
        categories: Arc<dyn RecordStore<Category>>,
    ) -> Self {
        Self {
            orders,
            products,
            categories,
            recent_orders: 3,
        }
    }

    /// Empty in-memory stores
    pub fn in_memory() -> Self {
        Self::seeded(SeedData::default())
    }

    /// In-memory stores pre-populated with `seed`
    pub fn seeded(seed: SeedData) -> Self {
        Self::new(
            Arc::new(InMemoryRecordStore::with_records(seed.orders)),
            Arc::new(InMemoryRecordStore::with_records(seed.products)),
            Arc::new(InMemoryRecordStore::with_records(seed.categories)),
        )
    }

    /// Override the number of orders on the dashboard
    pub fn with_recent_orders(mut self, count: usize) -> Self {
        self.recent_orders = count;
        self
    }

    /// Build the stores described by `config`
    pub fn from_config(config: &AdminConfig) -> Result<Self> {
        let state = match config.store.backend {
            StoreBackend::InMemory => {
                let seed = match &config.store.seed {
                    Some(path) => SeedData::from_yaml_file(path)?,
                    None => SeedData::default(),
                };
                tracing::info!(
                    categories = seed.categories.len(),
                    products = seed.products.len(),
                    orders = seed.orders.len(),
                    "using in-memory record store"
                );
                Self::seeded(seed)
            }
            StoreBackend::Remote => Self::remote(config)?,
        };

        Ok(state.with_recent_orders(config.dashboard.recent_orders))
    }

    #[cfg(feature = "remote")]
    fn remote(config: &AdminConfig) -> Result<Self> {
        use crate::storage::RestRecordStore;

        let url = config.store.url.as_deref().unwrap_or_default();
        let api_key = config.store.api_key.as_deref().unwrap_or_default();
        let client = reqwest::Client::new();

        tracing::info!(url, "using remote record store");

        Ok(Self::new(
            Arc::new(RestRecordStore::<Order>::with_client(client.clone(), url, api_key)),
            Arc::new(RestRecordStore::<Product>::with_client(client.clone(), url, api_key)),
            Arc::new(RestRecordStore::<Category>::with_client(client, url, api_key)),
        ))
    }

    #[cfg(not(feature = "remote"))]
    fn remote(_config: &AdminConfig) -> Result<Self> {
        anyhow::bail!("store.backend 'remote' requires the 'remote' feature")
    }
}
