//! Record trait defining the common shape of every stored collection item

use crate::core::field::FieldValue;
use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};

/// Base trait for all records kept in a [`RecordStore`](crate::core::RecordStore).
///
/// Every record has:
/// - id: Unique string identifier
/// - created_at: Creation timestamp
///
/// Records expose their fields by name through [`Record::field_value`], which
/// lets stores sort and count generically and lets the aggregation engine
/// follow a foreign key given only its field name.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The collection name used in URLs and by the record store (e.g., "orders")
    fn collection() -> &'static str;

    /// The singular name (e.g., "order")
    fn collection_singular() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> &str;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Get the value of a specific field by name
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}

/// Generate a fresh record identifier
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
