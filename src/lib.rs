//! # shop-admin
//!
//! Back-office API for a small shop: orders, products and categories, with a
//! dashboard overview.
//!
//! ## Features
//!
//! - **Record stores**: one [`RecordStore`](core::RecordStore) per collection,
//!   in memory or backed by a hosted PostgREST-style service (`remote`)
//! - **Aggregation engine**: pure functions for per-category product counts,
//!   order filtering, stock badges and slugs ([`engine`])
//! - **Validated payloads**: per-field filters and validators applied by the
//!   [`Validated`](core::validation::Validated) extractor
//! - **Typed errors**: every failure maps to an HTTP status and error code
//! - **Referential integrity**: categories with products cannot be deleted
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shop_admin::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_state(AdminState::in_memory())
//!         .register_resources()?
//!         .serve("127.0.0.1:3000")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        AdminError, AdminResult, FieldValue, OrderBy, OrderListParams, Record, RecordStore,
        SortDirection, StorageContext,
        validation::{EntityValidationConfig, Operation, ValidatableEntity, Validated},
    };

    // === Engine ===
    pub use crate::engine::{
        FilterCriteria, StockStatus, apply_filters, apply_filters_in, classify_stock,
        compute_dependent_counts, derive_slug,
    };

    // === Records ===
    pub use crate::entities::{Category, LineItem, Order, Product};

    // === Storage ===
    pub use crate::storage::InMemoryRecordStore;
    #[cfg(feature = "remote")]
    pub use crate::storage::RestRecordStore;

    // === Config ===
    pub use crate::config::{AdminConfig, SeedData, StoreBackend};

    // === Server ===
    pub use crate::server::{AdminState, EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
