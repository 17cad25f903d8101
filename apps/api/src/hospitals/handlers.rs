use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::hospital::{Hospital, HospitalInput};
use crate::models::user::Principal;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HospitalListResponse {
    pub data: Vec<Hospital>,
}

#[derive(Deserialize)]
pub struct ApprovalRequest {
    pub approved: bool,
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Hospital {id} not found"))
}

/// GET /api/v1/hospitals
/// Only approved hospitals are listed publicly.
pub async fn handle_list_approved(
    State(state): State<AppState>,
) -> Result<Json<HospitalListResponse>, AppError> {
    let data = state.hospitals.list_approved_hospitals().await?;
    Ok(Json(HospitalListResponse { data }))
}

/// GET /api/v1/hospitals/:id
pub async fn handle_get_hospital(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Hospital>, AppError> {
    let hospital = state
        .hospitals
        .get_hospital(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(hospital))
}

/// POST /api/v1/hospitals
pub async fn handle_register_hospital(
    State(state): State<AppState>,
    principal: Principal,
    Json(input): Json<HospitalInput>,
) -> Result<(StatusCode, Json<Hospital>), AppError> {
    input.validate()?;
    let hospital = state
        .hospitals
        .insert_hospital(principal.user_id, &input)
        .await?;
    info!(
        "User {} registered hospital {} (pending approval)",
        principal.user_id, hospital.id
    );
    Ok((StatusCode::CREATED, Json(hospital)))
}

/// PATCH /api/v1/hospitals/:id/approval
pub async fn handle_set_approval(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
    Json(req): Json<ApprovalRequest>,
) -> Result<Json<Hospital>, AppError> {
    principal.require_admin()?;
    let hospital = state
        .hospitals
        .set_hospital_approval(id, req.approved)
        .await?
        .ok_or_else(|| not_found(id))?;
    info!(
        "Admin {} set hospital {id} approved={}",
        principal.user_id, req.approved
    );
    Ok(Json(hospital))
}

/// DELETE /api/v1/hospitals/:id
pub async fn handle_delete_hospital(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let hospital = state
        .hospitals
        .get_hospital(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    principal.require_owner_or_admin(hospital.owner_id)?;

    if !state.hospitals.delete_hospital(id).await? {
        return Err(not_found(id));
    }
    info!("User {} deleted hospital {id}", principal.user_id);
    Ok(StatusCode::NO_CONTENT)
}
