use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::snake::{Snake, SnakeInput, SnakePatch};
use crate::models::user::Principal;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SnakeListResponse {
    pub data: Vec<Snake>,
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Snake {id} not found"))
}

/// GET /api/v1/snakes
pub async fn handle_list_snakes(
    State(state): State<AppState>,
) -> Result<Json<SnakeListResponse>, AppError> {
    let data = state.snakes.list_snakes().await?;
    Ok(Json(SnakeListResponse { data }))
}

/// GET /api/v1/snakes/:id
pub async fn handle_get_snake(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Snake>, AppError> {
    let snake = state.snakes.get_snake(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(snake))
}

/// POST /api/v1/snakes
pub async fn handle_create_snake(
    State(state): State<AppState>,
    principal: Principal,
    Json(input): Json<SnakeInput>,
) -> Result<(StatusCode, Json<Snake>), AppError> {
    principal.require_admin()?;
    input.validate()?;
    let snake = state.snakes.insert_snake(&input).await?;
    info!("Admin {} created snake {}", principal.user_id, snake.id);
    Ok((StatusCode::CREATED, Json(snake)))
}

/// PUT /api/v1/snakes/:id
pub async fn handle_replace_snake(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
    Json(input): Json<SnakeInput>,
) -> Result<Json<Snake>, AppError> {
    principal.require_admin()?;
    input.validate()?;
    let snake = state
        .snakes
        .replace_snake(id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    info!("Admin {} replaced snake {id}", principal.user_id);
    Ok(Json(snake))
}

/// PATCH /api/v1/snakes/:id
pub async fn handle_patch_snake(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
    Json(patch): Json<SnakePatch>,
) -> Result<Json<Snake>, AppError> {
    principal.require_admin()?;
    patch.validate()?;
    let snake = state
        .snakes
        .patch_snake(id, &patch)
        .await?
        .ok_or_else(|| not_found(id))?;
    info!("Admin {} updated snake {id}", principal.user_id);
    Ok(Json(snake))
}

/// DELETE /api/v1/snakes/:id
pub async fn handle_delete_snake(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    principal.require_admin()?;
    if !state.snakes.delete_snake(id).await? {
        return Err(not_found(id));
    }
    info!("Admin {} deleted snake {id}", principal.user_id);
    Ok(StatusCode::NO_CONTENT)
}
