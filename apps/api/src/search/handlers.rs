use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::hospital::GeoPoint;
use crate::models::snake::Snake;
use crate::search::keyword::{SnakeQuery, SNAKE_RESULT_LIMIT};
use crate::search::proximity::{rank_nearest, HospitalWithDistance, NEAREST_HOSPITAL_LIMIT};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct KeywordQuery {
    pub keyword: Option<String>,
}

#[derive(Serialize)]
pub struct SnakeSearchResponse {
    pub data: Vec<Snake>,
}

#[derive(Deserialize)]
pub struct NearestQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

#[derive(Serialize)]
pub struct NearestHospitalsResponse {
    pub message: String,
    pub data: Vec<HospitalWithDistance>,
}

/// GET /api/v1/snakes/search?keyword=
pub async fn handle_snake_search(
    State(state): State<AppState>,
    query: Result<Query<KeywordQuery>, QueryRejection>,
) -> Result<Json<SnakeSearchResponse>, AppError> {
    let Query(params) = query?;
    let keyword = params.keyword.unwrap_or_default();
    let query = SnakeQuery::parse(&keyword)?;
    debug!(
        "Snake search '{}' -> {} predicate(s)",
        keyword.trim(),
        query.predicates().len()
    );

    let snakes = state.snakes.list_snakes().await?;
    let data = query.execute(snakes, SNAKE_RESULT_LIMIT);

    info!("Snake search '{}' matched {} record(s)", keyword.trim(), data.len());
    Ok(Json(SnakeSearchResponse { data }))
}

/// GET /api/v1/hospitals/nearest?lat=&lng=
pub async fn handle_nearest_hospitals(
    State(state): State<AppState>,
    query: Result<Query<NearestQuery>, QueryRejection>,
) -> Result<Json<NearestHospitalsResponse>, AppError> {
    let Query(params) = query?;
    let origin = GeoPoint {
        latitude: parse_coordinate("lat", params.lat.as_deref(), 90.0)?,
        longitude: parse_coordinate("lng", params.lng.as_deref(), 180.0)?,
    };
    debug!(
        "Nearest hospital search from ({}, {})",
        origin.latitude, origin.longitude
    );

    // Unapproved hospitals are deliberately not filtered here.
    let hospitals = state.hospitals.list_hospitals().await?;
    let data = rank_nearest(origin, hospitals, NEAREST_HOSPITAL_LIMIT);

    if data.is_empty() {
        return Err(AppError::NotFound(
            "No hospitals with a known location were found".into(),
        ));
    }

    info!("Nearest hospital search returned {} result(s)", data.len());
    Ok(Json(NearestHospitalsResponse {
        message: format!("Found {} nearest hospital(s)", data.len()),
        data,
    }))
}

fn parse_coordinate(name: &str, raw: Option<&str>, bound: f64) -> Result<f64, AppError> {
    let raw = raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(format!("{name} is required")))?;

    let value: f64 = raw
        .parse()
        .map_err(|_| AppError::Validation(format!("{name} must be a number, got '{raw}'")))?;

    if !value.is_finite() || value.abs() > bound {
        return Err(AppError::Validation(format!(
            "{name} must be between -{bound} and {bound}"
        )));
    }
    Ok(value)
}
