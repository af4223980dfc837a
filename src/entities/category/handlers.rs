//! Category HTTP handlers

use super::model::Category;
use crate::core::error::IntegrityError;
use crate::core::validation::Validated;
use crate::core::{AdminResult, OrderBy, StorageContext};
use crate::engine::compute_dependent_counts;
use crate::entities::product::Product;
use crate::entities::support::{
    ensure_unique_slug, fetch_existing, optional_str, required_str, slug_for,
};
use crate::server::AdminState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use serde_json::{Value, json};

/// A category with the number of products filed under it
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    #[serde(flatten)]
    pub category: Category,
    pub product_count: usize,
}

async fn product_count(state: &AdminState, category_id: &str) -> AdminResult<usize> {
    state
        .products
        .count("category_id", category_id)
        .await
        .storage_err(state.products.backend())
}

pub async fn list_categories(State(state): State<AdminState>) -> AdminResult<Json<Value>> {
    let by_name = OrderBy::asc("name");
    let (categories, products) = tokio::join!(
        state.categories.list(Some(&by_name)),
        state.products.list(None),
    );
    let categories = categories.storage_err(state.categories.backend())?;
    let products = products.storage_err(state.products.backend())?;

    let counts = compute_dependent_counts::<Category, Product>(&categories, &products, "category_id");

    let views: Vec<CategoryView> = categories
        .into_iter()
        .map(|category| CategoryView {
            product_count: counts.get(&category.id).copied().unwrap_or(0),
            category,
        })
        .collect();

    Ok(Json(json!({
        "categories": views,
        "count": views.len()
    })))
}

pub async fn get_category(
    State(state): State<AdminState>,
    Path(id): Path<String>,
) -> AdminResult<Json<CategoryView>> {
    let category = fetch_existing(state.categories.as_ref(), &id).await?;
    let product_count = product_count(&state, &id).await?;

    Ok(Json(CategoryView {
        category,
        product_count,
    }))
}

pub async fn create_category(
    State(state): State<AdminState>,
    Validated(payload, ..): Validated<Category>,
) -> AdminResult<(StatusCode, Json<CategoryView>)> {
    let name = required_str(&payload, "name")?;
    let slug = slug_for(&name, "name")?;
    ensure_unique_slug(state.categories.as_ref(), &slug).await?;

    let category = Category::new(name, optional_str(&payload, "description"));
    let category = state
        .categories
        .insert(category)
        .await
        .storage_err(state.categories.backend())?;

    tracing::info!(id = %category.id, slug = %category.slug, "category created");
    Ok((
        StatusCode::CREATED,
        Json(CategoryView {
            category,
            product_count: 0,
        }),
    ))
}

pub async fn update_category(
    State(state): State<AdminState>,
    Path(id): Path<String>,
    Validated(payload, ..): Validated<Category>,
) -> AdminResult<Json<CategoryView>> {
    let mut category = fetch_existing(state.categories.as_ref(), &id).await?;

    let name = required_str(&payload, "name")?;
    let slug = slug_for(&name, "name")?;
    if slug != category.slug {
        ensure_unique_slug(state.categories.as_ref(), &slug).await?;
    }
    category.rename(name);
    category.description = optional_str(&payload, "description");
    category.touch();

    let category = state
        .categories
        .update(&id, category)
        .await
        .storage_err(state.categories.backend())?;
    let product_count = product_count(&state, &id).await?;

    tracing::info!(id = %category.id, "category updated");
    Ok(Json(CategoryView {
        category,
        product_count,
    }))
}

/// Delete a category that no product references
pub async fn delete_category(
    State(state): State<AdminState>,
    Path(id): Path<String>,
) -> AdminResult<StatusCode> {
    fetch_existing(state.categories.as_ref(), &id).await?;

    let count = product_count(&state, &id).await?;
    if count > 0 {
        tracing::warn!(id = %id, count, "refusing to delete referenced category");
        return Err(IntegrityError::StillReferenced {
            collection: "category".to_string(),
            id,
            dependents: "product".to_string(),
            count,
        }
        .into());
    }

    state
        .categories
        .delete(&id)
        .await
        .storage_err(state.categories.backend())?;

    tracing::info!(id = %id, "category deleted");
    Ok(StatusCode::NO_CONTENT)
}
