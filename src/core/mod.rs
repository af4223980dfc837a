//! Core module containing fundamental traits and types

pub mod entity;
pub mod error;
pub mod field;
pub mod query;
pub mod service;
pub mod validation;

pub use entity::{Record, new_record_id};
pub use error::{AdminError, AdminResult, StorageContext};
pub use field::{FieldFormat, FieldValue};
pub use query::{OrderBy, OrderListParams, SortDirection};
pub use service::RecordStore;
