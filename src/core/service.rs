//! Record store trait for collection operations

use crate::core::{Record, query::OrderBy};
use anyhow::Result;
use async_trait::async_trait;

/// Store trait for a single collection of records
///
/// Implementations provide list/count/insert/update/delete for one record
/// type. Handlers are agnostic to the underlying storage: the in-memory store
/// and the hosted REST client both satisfy this contract.
///
/// Callers never assume freshness. After any mutation they reload the
/// collection with [`RecordStore::list`].
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// Human-readable backend name used in logs and errors
    fn backend(&self) -> &'static str;

    /// List every record, optionally ordered by a field
    async fn list(&self, order_by: Option<&OrderBy>) -> Result<Vec<T>>;

    /// Get a record by ID
    async fn get(&self, id: &str) -> Result<Option<T>>;

    /// Count records whose `field` equals `value`
    async fn count(&self, field: &str, value: &str) -> Result<usize>;

    /// Count every record in the collection
    async fn count_all(&self) -> Result<usize>;

    /// Insert a new record
    async fn insert(&self, record: T) -> Result<T>;

    /// Replace an existing record
    async fn update(&self, id: &str, record: T) -> Result<T>;

    /// Delete a record
    async fn delete(&self, id: &str) -> Result<()>;
}
