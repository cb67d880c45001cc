use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::dto::CreateGroupRequest;
use crate::api::AppState;
use crate::domain::{LinkGroup, StudBudError};
use crate::services::ReadingService;

pub async fn create_group(
    State(state): State<AppState>,
    Json(req): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<LinkGroup>), StudBudError> {
    let group = ReadingService::create_group(&state.store(), req)?;
    Ok((StatusCode::CREATED, Json(group)))
}

pub async fn delete_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, StudBudError> {
    ReadingService::delete_group(&state.store(), &id)?;
    Ok(StatusCode::NO_CONTENT)
}
