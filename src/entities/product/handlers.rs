//! Product HTTP handlers

use super::model::Product;
use crate::core::error::ValidationError;
use crate::core::validation::Validated;
use crate::core::{AdminResult, OrderBy, StorageContext};
use crate::engine::{StatusBadge, classify_stock};
use crate::entities::category::Category;
use crate::entities::support::{
    ensure_unique_slug, fetch_existing, optional_f64, optional_str, optional_u32, required_f64,
    required_str, required_u32, slug_for,
};
use crate::server::AdminState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::HashMap;

/// Shown when a product points at a category that no longer exists
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// A product with its category name and stock badge
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub category_name: String,
    pub stock_status: StatusBadge,
}

impl ProductView {
    pub fn new(product: Product, category_name: Option<&str>) -> Self {
        Self {
            category_name: category_name.unwrap_or(UNKNOWN_CATEGORY).to_string(),
            stock_status: classify_stock(product.stock_quantity).into(),
            product,
        }
    }
}

/// Look up the category a product is filed under, as a field error if absent
async fn require_category(state: &AdminState, category_id: &str) -> AdminResult<Category> {
    state
        .categories
        .get(category_id)
        .await
        .storage_err(state.categories.backend())?
        .ok_or_else(|| {
            ValidationError::field(
                "category_id",
                format!("category '{}' does not exist", category_id),
            )
            .into()
        })
}

pub async fn list_products(State(state): State<AdminState>) -> AdminResult<Json<Value>> {
    let newest_first = OrderBy::desc("created_at");
    let (products, categories) = tokio::join!(
        state.products.list(Some(&newest_first)),
        state.categories.list(None),
    );
    let products = products.storage_err(state.products.backend())?;
    let categories = categories.storage_err(state.categories.backend())?;

    let names: HashMap<&str, &str> = categories
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();

    let views: Vec<ProductView> = products
        .into_iter()
        .map(|product| {
            let name = names.get(product.category_id.as_str()).copied();
            ProductView::new(product, name)
        })
        .collect();

    Ok(Json(json!({
        "products": views,
        "count": views.len()
    })))
}

pub async fn get_product(
    State(state): State<AdminState>,
    Path(id): Path<String>,
) -> AdminResult<Json<ProductView>> {
    let product = fetch_existing(state.products.as_ref(), &id).await?;
    let category = state
        .categories
        .get(&product.category_id)
        .await
        .storage_err(state.categories.backend())?;

    let name = category.as_ref().map(|c| c.name.as_str());
    Ok(Json(ProductView::new(product, name)))
}

pub async fn create_product(
    State(state): State<AdminState>,
    Validated(payload, ..): Validated<Product>,
) -> AdminResult<(StatusCode, Json<ProductView>)> {
    let title = required_str(&payload, "title")?;
    let slug = slug_for(&title, "title")?;
    let category = require_category(&state, &required_str(&payload, "category_id")?).await?;
    ensure_unique_slug(state.products.as_ref(), &slug).await?;

    let product = Product::new(
        title,
        category.id.clone(),
        required_f64(&payload, "price")?,
        required_u32(&payload, "stock_quantity")?,
        optional_str(&payload, "description"),
    );

    let product = state
        .products
        .insert(product)
        .await
        .storage_err(state.products.backend())?;

    tracing::info!(id = %product.id, slug = %product.slug, "product created");
    Ok((
        StatusCode::CREATED,
        Json(ProductView::new(product, Some(&category.name))),
    ))
}

/// Update only the fields present in the payload
pub async fn update_product(
    State(state): State<AdminState>,
    Path(id): Path<String>,
    Validated(payload, ..): Validated<Product>,
) -> AdminResult<Json<ProductView>> {
    let mut product = fetch_existing(state.products.as_ref(), &id).await?;

    if let Some(title) = optional_str(&payload, "title") {
        let slug = slug_for(&title, "title")?;
        if slug != product.slug {
            ensure_unique_slug(state.products.as_ref(), &slug).await?;
        }
        product.rename(title);
    }

    let category = match optional_str(&payload, "category_id") {
        Some(category_id) => Some(require_category(&state, &category_id).await?),
        None => state
            .categories
            .get(&product.category_id)
            .await
            .storage_err(state.categories.backend())?,
    };
    if let Some(category) = &category {
        product.category_id = category.id.clone();
    }

    if let Some(price) = optional_f64(&payload, "price") {
        product.price = price;
    }
    if let Some(stock) = optional_u32(&payload, "stock_quantity")? {
        product.stock_quantity = stock;
    }
    if payload.get("description").is_some() {
        product.description = optional_str(&payload, "description");
    }

    product.touch();
    let product = state
        .products
        .update(&id, product)
        .await
        .storage_err(state.products.backend())?;

    tracing::info!(id = %product.id, "product updated");
    let name = category.as_ref().map(|c| c.name.as_str());
    Ok(Json(ProductView::new(product, name)))
}

pub async fn delete_product(
    State(state): State<AdminState>,
    Path(id): Path<String>,
) -> AdminResult<StatusCode> {
    fetch_existing(state.products.as_ref(), &id).await?;

    state
        .products
        .delete(&id)
        .await
        .storage_err(state.products.backend())?;

    tracing::info!(id = %id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}
