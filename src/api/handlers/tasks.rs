use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::dto::{BoardResponse, CreateTaskRequest, MoveTaskRequest, UpdateTaskRequest};
use crate::api::AppState;
use crate::domain::{StudBudError, Task};
use crate::services::BoardService;

pub async fn get_board(State(state): State<AppState>) -> Result<Json<BoardResponse>, StudBudError> {
    let board = BoardService::get_board(&state.store())?;
    Ok(Json(board))
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), StudBudError> {
    let task = BoardService::create_task(&state.store(), req)?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, StudBudError> {
    let task = BoardService::update_task(&state.store(), &id, req)?;
    Ok(Json(task))
}

pub async fn move_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<MoveTaskRequest>,
) -> Result<Json<BoardResponse>, StudBudError> {
    let board = BoardService::move_task(&state.store(), &id, req)?;
    Ok(Json(board))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, StudBudError> {
    BoardService::delete_task(&state.store(), &id)?;
    Ok(StatusCode::NO_CONTENT)
}
