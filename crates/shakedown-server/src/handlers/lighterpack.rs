//! Lighterpack import handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::check_list_size;
use crate::{AppError, AppState, SuccessResponse};
use shakedown_core::GearItem;

/// Request body for an import
#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub url: Option<String>,
}

/// An imported, priced gear list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    pub gear_list: Vec<GearItem>,
    pub item_count: usize,
}

/// POST /api/lighterpack/import - Import a shared Lighterpack list
pub async fn import_lighterpack(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ImportRequest>,
) -> Result<Json<SuccessResponse<ImportResponse>>, AppError> {
    let url = request
        .url
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| AppError::bad_request("Lighterpack URL is required"))?;

    let gear_list = state
        .lighterpack
        .fetch(&url)
        .await
        .map_err(AppError::from_core)?;
    check_list_size(gear_list.len(), state.config.max_items)?;

    info!("Imported {} items from {}", gear_list.len(), url);

    Ok(Json(SuccessResponse::new(ImportResponse {
        item_count: gear_list.len(),
        gear_list,
    })))
}
