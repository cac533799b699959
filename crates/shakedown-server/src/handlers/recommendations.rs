//! Starter list handlers

use std::str::FromStr;

use axum::Json;
use serde::Deserialize;

use crate::{AppError, SuccessResponse};
use shakedown_core::{starter_list, StarterList, TripProfile};

/// Request body for a starter list
///
/// Fields are optional so a missing one yields a 400 with a clear message
/// rather than a deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarterListRequest {
    pub trip_type: Option<String>,
    pub season: Option<String>,
    pub terrain: Option<String>,
    pub experience: Option<String>,
    pub budget: Option<String>,
}

fn parse_field<T: FromStr<Err = String>>(value: &str) -> Result<T, AppError> {
    value.parse::<T>().map_err(|e| AppError::bad_request(&e))
}

impl StarterListRequest {
    fn into_profile(self) -> Result<TripProfile, AppError> {
        match (
            self.trip_type,
            self.season,
            self.terrain,
            self.experience,
            self.budget,
        ) {
            (Some(trip_type), Some(season), Some(terrain), Some(experience), Some(budget)) => {
                Ok(TripProfile {
                    trip_type: parse_field(&trip_type)?,
                    season: parse_field(&season)?,
                    terrain: parse_field(&terrain)?,
                    experience: parse_field(&experience)?,
                    budget: parse_field(&budget)?,
                })
            }
            _ => Err(AppError::bad_request(
                "Please provide trip type, season, terrain, experience level, and budget",
            )),
        }
    }
}

/// POST /api/recommendations - Build a starter list for a trip profile
pub async fn create_starter_list(
    Json(request): Json<StarterListRequest>,
) -> Result<Json<SuccessResponse<StarterList>>, AppError> {
    let profile = request.into_profile()?;
    Ok(Json(SuccessResponse::new(starter_list(profile))))
}
