//! In-memory implementation of RecordStore for testing and development

use crate::core::query::{OrderBy, SortDirection};
use crate::core::{FieldValue, Record, RecordStore};
use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory record store
///
/// Useful for testing and development. Uses RwLock for thread-safe access;
/// the lock is never held across an await point.
#[derive(Clone)]
pub struct InMemoryRecordStore<T: Record> {
    records: Arc<RwLock<HashMap<String, T>>>,
}

impl<T: Record> InMemoryRecordStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store pre-populated with records
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let map: HashMap<String, T> = records
            .into_iter()
            .map(|record| (record.id().to_string(), record))
            .collect();
        Self {
            records: Arc::new(RwLock::new(map)),
        }
    }
}

impl<T: Record> Default for InMemoryRecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn value_equals(value: &FieldValue, expected: &str) -> bool {
    match value {
        FieldValue::String(s) => s == expected,
        FieldValue::Integer(i) => expected.parse::<i64>().is_ok_and(|e| e == *i),
        FieldValue::Float(f) => expected.parse::<f64>().is_ok_and(|e| e == *f),
        FieldValue::DateTime(dt) => dt.to_rfc3339() == expected,
        FieldValue::Null => false,
    }
}

fn sort_records<T: Record>(records: &mut [T], order_by: Option<&OrderBy>) {
    // Insertion order is not tracked, so default to creation order
    records.sort_by(|a, b| {
        a.created_at()
            .cmp(&b.created_at())
            .then_with(|| a.id().cmp(b.id()))
    });

    let Some(order_by) = order_by else {
        return;
    };

    records.sort_by(|a, b| {
        let left = a.field_value(&order_by.field).unwrap_or(FieldValue::Null);
        let right = b.field_value(&order_by.field).unwrap_or(FieldValue::Null);
        let ordering = left.sort_cmp(&right);
        match order_by.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

#[async_trait]
impl<T: Record> RecordStore<T> for InMemoryRecordStore<T> {
    fn backend(&self) -> &'static str {
        "in-memory"
    }

    async fn list(&self, order_by: Option<&OrderBy>) -> Result<Vec<T>> {
        let mut records: Vec<T> = {
            let records = self
                .records
                .read()
                .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;
            records.values().cloned().collect()
        };

        sort_records(&mut records, order_by);
        Ok(records)
    }

    async fn get(&self, id: &str) -> Result<Option<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.get(id).cloned())
    }

    async fn count(&self, field: &str, value: &str) -> Result<usize> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records
            .values()
            .filter(|record| {
                record
                    .field_value(field)
                    .is_some_and(|v| value_equals(&v, value))
            })
            .count())
    }

    async fn count_all(&self) -> Result<usize> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.len())
    }

    async fn insert(&self, record: T) -> Result<T> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if records.contains_key(record.id()) {
            bail!("{} '{}' already exists", T::collection_singular(), record.id());
        }
        records.insert(record.id().to_string(), record.clone());

        Ok(record)
    }

    async fn update(&self, id: &str, record: T) -> Result<T> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if !records.contains_key(id) {
            bail!("{} '{}' not found", T::collection_singular(), id);
        }
        records.insert(id.to_string(), record.clone());

        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        records.remove(id);

        Ok(())
    }
}
