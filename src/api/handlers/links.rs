use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::dto::{
    CreateLinkRequest, MoveLinkRequest, ReadingListResponse, UpdateLinkRequest,
};
use crate::api::AppState;
use crate::domain::{Link, StudBudError};
use crate::services::ReadingService;

pub async fn get_reading_list(
    State(state): State<AppState>,
) -> Result<Json<ReadingListResponse>, StudBudError> {
    let list = ReadingService::get_reading_list(&state.store())?;
    Ok(Json(list))
}

pub async fn create_link(
    State(state): State<AppState>,
    Json(req): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<Link>), StudBudError> {
    let link = ReadingService::create_link(&state.store(), req)?;
    Ok((StatusCode::CREATED, Json(link)))
}

pub async fn update_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateLinkRequest>,
) -> Result<Json<Link>, StudBudError> {
    let link = ReadingService::update_link(&state.store(), &id, req)?;
    Ok(Json(link))
}

pub async fn move_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<MoveLinkRequest>,
) -> Result<Json<Link>, StudBudError> {
    let link = ReadingService::move_link(&state.store(), &id, req)?;
    Ok(Json(link))
}

pub async fn delete_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, StudBudError> {
    ReadingService::delete_link(&state.store(), &id)?;
    Ok(StatusCode::NO_CONTENT)
}
