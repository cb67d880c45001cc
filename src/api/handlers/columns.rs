use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::dto::{CreateColumnRequest, UpdateColumnRequest};
use crate::api::AppState;
use crate::domain::{Column, StudBudError};
use crate::services::BoardService;

pub async fn create_column(
    State(state): State<AppState>,
    Json(req): Json<CreateColumnRequest>,
) -> Result<(StatusCode, Json<Column>), StudBudError> {
    let column = BoardService::create_column(&state.store(), req)?;
    Ok((StatusCode::CREATED, Json(column)))
}

pub async fn update_column(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateColumnRequest>,
) -> Result<Json<Column>, StudBudError> {
    let column = BoardService::update_column(&state.store(), &id, req)?;
    Ok(Json(column))
}

pub async fn delete_column(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, StudBudError> {
    BoardService::delete_column(&state.store(), &id)?;
    Ok(StatusCode::NO_CONTENT)
}
