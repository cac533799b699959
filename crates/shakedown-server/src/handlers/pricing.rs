//! Price estimate handlers

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::{AppError, SuccessResponse};
use shakedown_core::{estimate_price_with_basis, normalize_category, Category, PriceBasis};

const ESTIMATE_NOTE: &str = "Price is an estimate based on typical market values";

/// Request body for a single price estimate
#[derive(Debug, Deserialize)]
pub struct PriceEstimateRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub weight_oz: Option<f64>,
}

/// An estimated price and how it was derived
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEstimateResponse {
    pub name: String,
    pub category: Category,
    pub estimated_price: f64,
    pub basis: PriceBasis,
    pub note: &'static str,
}

/// POST /api/price-estimate - Estimate the price of one item
pub async fn estimate_single_price(
    Json(request): Json<PriceEstimateRequest>,
) -> Result<Json<SuccessResponse<PriceEstimateResponse>>, AppError> {
    let name = request.name.as_deref().map(str::trim).unwrap_or("");
    let label = request.category.as_deref().map(str::trim).unwrap_or("");
    if name.is_empty() || label.is_empty() {
        return Err(AppError::bad_request(
            "Item name and category are required",
        ));
    }

    let category = normalize_category(Some(label), name);
    let estimate = estimate_price_with_basis(name, &category, request.weight_oz);

    Ok(Json(SuccessResponse::new(PriceEstimateResponse {
        name: name.to_string(),
        category,
        estimated_price: estimate.price,
        basis: estimate.basis,
        note: ESTIMATE_NOTE,
    })))
}
