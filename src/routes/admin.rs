//! Admin routes — the pricing console API.
//!
//! All handlers take [`AdminUser`], so non-admin callers get 403 before any
//! table is read. Updates are partial: absent fields keep their value.

use axum::extract::{Path, State};
use axum::response::Json;
use serde::Deserialize;
use tracing::info;

use crate::error::ApiError;
use crate::routes::auth::AdminUser;
use crate::state::{AppState, FabricPricing, PatchPricing, ProductPricing};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPricingUpdate {
    pub base_price: Option<f64>,
    pub bulk_discount: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct PatchPricingUpdate {
    pub price: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct FabricPricingUpdate {
    pub price: Option<f64>,
    pub description: Option<String>,
}

// =============================================================================
// UPDATE APPLICATION
// =============================================================================

fn validated_price(value: f64, what: &str) -> Result<f64, ApiError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ApiError::Validation(format!(
            "{what} must be a non-negative number"
        )));
    }
    Ok(value)
}

pub(crate) fn apply_product_update(
    row: &ProductPricing,
    update: &ProductPricingUpdate,
) -> Result<ProductPricing, ApiError> {
    let mut updated = row.clone();
    if let Some(base_price) = update.base_price {
        updated.base_price = validated_price(base_price, "base price")?;
    }
    if let Some(bulk_discount) = update.bulk_discount {
        if !(0.0..=1.0).contains(&bulk_discount) {
            return Err(ApiError::Validation(
                "bulk discount must be between 0 and 1".to_owned(),
            ));
        }
        updated.bulk_discount = bulk_discount;
    }
    Ok(updated)
}

pub(crate) fn apply_patch_update(
    row: &PatchPricing,
    update: &PatchPricingUpdate,
) -> Result<PatchPricing, ApiError> {
    let mut updated = row.clone();
    if let Some(price) = update.price {
        updated.price = validated_price(price, "price")?;
    }
    Ok(updated)
}

pub(crate) fn apply_fabric_update(
    row: &FabricPricing,
    update: &FabricPricingUpdate,
) -> Result<FabricPricing, ApiError> {
    let mut updated = row.clone();
    if let Some(price) = update.price {
        updated.price = validated_price(price, "price")?;
    }
    if let Some(description) = &update.description {
        if description.trim().is_empty() {
            return Err(ApiError::Validation("description must not be empty".to_owned()));
        }
        updated.description = description.clone();
    }
    Ok(updated)
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/admin/pricing` — product pricing table.
pub async fn list_product_pricing(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Json<Vec<ProductPricing>> {
    Json(state.pricing.read().await.products.clone())
}

/// `GET /api/admin/patches` — patch pricing table.
pub async fn list_patch_pricing(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Json<Vec<PatchPricing>> {
    Json(state.pricing.read().await.patches.clone())
}

/// `GET /api/admin/fabrics` — fabric pricing table.
pub async fn list_fabric_pricing(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Json<Vec<FabricPricing>> {
    Json(state.pricing.read().await.fabrics.clone())
}

/// `PATCH /api/admin/pricing/{id}` — update one product row.
pub async fn update_product_pricing(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(update): Json<ProductPricingUpdate>,
) -> Result<Json<ProductPricing>, ApiError> {
    let mut pricing = state.pricing.write().await;
    let row = pricing
        .products
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("product {id}")))?;
    *row = apply_product_update(row, &update)?;
    info!(product = %id, "product pricing updated");
    Ok(Json(row.clone()))
}

/// `PATCH /api/admin/patches/{id}` — update one patch row.
pub async fn update_patch_pricing(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(update): Json<PatchPricingUpdate>,
) -> Result<Json<PatchPricing>, ApiError> {
    let mut pricing = state.pricing.write().await;
    let row = pricing
        .patches
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("patch {id}")))?;
    *row = apply_patch_update(row, &update)?;
    info!(patch = %id, "patch pricing updated");
    Ok(Json(row.clone()))
}

/// `PATCH /api/admin/fabrics/{id}` — update one fabric row.
pub async fn update_fabric_pricing(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(update): Json<FabricPricingUpdate>,
) -> Result<Json<FabricPricing>, ApiError> {
    let mut pricing = state.pricing.write().await;
    let row = pricing
        .fabrics
        .iter_mut()
        .find(|f| f.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("fabric {id}")))?;
    *row = apply_fabric_update(row, &update)?;
    info!(fabric = %id, "fabric pricing updated");
    Ok(Json(row.clone()))
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;
