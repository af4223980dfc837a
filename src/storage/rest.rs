//! RecordStore client for a hosted PostgREST-style service
//!
//! Each collection maps to `{base_url}/rest/v1/{collection}`. Filters use the
//! `field=eq.value` syntax, ordering uses `order=field.desc`, and counts are
//! read from the `Content-Range` header of a `HEAD` request sent with
//! `Prefer: count=exact`.

use crate::core::query::OrderBy;
use crate::core::{Record, RecordStore};
use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use std::marker::PhantomData;

/// Remote record store for one collection
pub struct RestRecordStore<T> {
    client: Client,
    base_url: String,
    api_key: String,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for RestRecordStore<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: Record> RestRecordStore<T> {
    /// Create a client for `base_url` authenticated with `api_key`
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self::with_client(Client::new(), base_url, api_key)
    }

    /// Create a client sharing an existing connection pool
    pub fn with_client(client: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            _record: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, T::collection())
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, self.collection_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn count_matching(&self, filter: Option<(&str, &str)>) -> Result<usize> {
        let mut query = vec![("select".to_string(), "id".to_string())];
        if let Some((field, value)) = filter {
            query.push((field.to_string(), format!("eq.{}", value)));
        }

        let response = self
            .request(Method::HEAD)
            .header("Prefer", "count=exact")
            .query(&query)
            .send()
            .await?
            .error_for_status()?;

        let range = response
            .headers()
            .get("content-range")
            .ok_or_else(|| anyhow!("count response for {} has no Content-Range", T::collection()))?
            .to_str()
            .context("Content-Range is not valid ASCII")?;

        parse_content_range(range)
    }
}

/// Extract the total from a `Content-Range` value such as `0-24/3573` or `*/0`
pub fn parse_content_range(range: &str) -> Result<usize> {
    let (_, total) = range
        .rsplit_once('/')
        .ok_or_else(|| anyhow!("malformed Content-Range '{}'", range))?;
    if total == "*" {
        bail!("Content-Range '{}' does not carry an exact count", range);
    }
    total
        .parse()
        .with_context(|| format!("malformed Content-Range '{}'", range))
}

#[async_trait]
impl<T: Record> RecordStore<T> for RestRecordStore<T> {
    fn backend(&self) -> &'static str {
        "remote"
    }

    async fn list(&self, order_by: Option<&OrderBy>) -> Result<Vec<T>> {
        let mut query = vec![("select".to_string(), "*".to_string())];
        if let Some(order_by) = order_by {
            query.push(("order".to_string(), order_by.to_postgrest()));
        }

        let records = self
            .request(Method::GET)
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<T>>()
            .await?;

        Ok(records)
    }

    async fn get(&self, id: &str) -> Result<Option<T>> {
        let records = self
            .request(Method::GET)
            .query(&[("select", "*".to_string()), ("id", format!("eq.{}", id))])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<T>>()
            .await?;

        Ok(records.into_iter().next())
    }

    async fn count(&self, field: &str, value: &str) -> Result<usize> {
        self.count_matching(Some((field, value))).await
    }

    async fn count_all(&self) -> Result<usize> {
        self.count_matching(None).await
    }

    async fn insert(&self, record: T) -> Result<T> {
        let created = self
            .request(Method::POST)
            .header("Prefer", "return=representation")
            .json(&[&record])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<T>>()
            .await?;

        Ok(created.into_iter().next().unwrap_or(record))
    }

    async fn update(&self, id: &str, record: T) -> Result<T> {
        let updated = self
            .request(Method::PATCH)
            .header("Prefer", "return=representation")
            .query(&[("id", format!("eq.{}", id))])
            .json(&record)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<T>>()
            .await?;

        updated
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("{} '{}' not found", T::collection_singular(), id))
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.request(Method::DELETE)
            .query(&[("id", format!("eq.{}", id))])
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
