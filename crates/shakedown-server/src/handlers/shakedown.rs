//! Shakedown handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::check_list_size;
use crate::{AppError, AppState, SuccessResponse};
use shakedown_core::{
    shakedown::shakedown_with, GearItem, GearSummary, RawGearItem, RecommendationReport,
};

/// Request body for a shakedown
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShakedownRequest {
    pub gear_list: Option<Vec<RawGearItem>>,
}

/// A shakedown report stamped with its generation time
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShakedownResponse {
    pub items: Vec<GearItem>,
    pub summary: GearSummary,
    pub recommendations: RecommendationReport,
    pub generated_at: DateTime<Utc>,
}

/// POST /api/shakedown - Analyze a gear list
///
/// Validates the list, normalizes categories, fills missing prices and
/// returns ranked recommendations.
pub async fn create_shakedown(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ShakedownRequest>,
) -> Result<(StatusCode, Json<SuccessResponse<ShakedownResponse>>), AppError> {
    let gear_list = request
        .gear_list
        .ok_or_else(|| AppError::bad_request("Please provide a valid gear list array"))?;
    check_list_size(gear_list.len(), state.config.max_items)?;

    let report = shakedown_with(&state.engine, &gear_list).map_err(AppError::from_core)?;

    info!(
        "Shakedown: {} items, {}oz, {} swaps, {} optimizations",
        report.summary.total_items,
        report.summary.total_weight_oz,
        report.recommendations.high_priority.len(),
        report.recommendations.medium_priority.len()
    );

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new(ShakedownResponse {
            items: report.items,
            summary: report.summary,
            recommendations: report.recommendations,
            generated_at: Utc::now(),
        })),
    ))
}
