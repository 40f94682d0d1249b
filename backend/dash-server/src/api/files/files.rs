//! File manager REST API handlers
//!
//! List and update responses use [`FileSummary`], which leaves out the
//! base64 payload. Only the single-file fetch and upload return it.

use crate::{ApiResult, AppState, CurrentUser, JsonBody, RecordPath};

use dash_core::{FileRecord, FileSummary, FileUpdate, FileUpload};

use axum::{Json, extract::State, http::StatusCode};
use log::info;

/// GET /files/
pub async fn list_files(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Json<Vec<FileSummary>> {
    Json(state.store.files.list_as(|file| FileSummary::from(file)).await)
}

/// GET /files/{id}
pub async fn get_file(
    State(state): State<AppState>,
    _user: CurrentUser,
    RecordPath(id): RecordPath,
) -> ApiResult<Json<FileRecord>> {
    Ok(Json(state.store.files.get(id).await?))
}

/// POST /files/
pub async fn upload_file(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    JsonBody(upload): JsonBody<FileUpload>,
) -> (StatusCode, Json<FileRecord>) {
    let file = state.store.files.create(upload).await;
    info!(
        "File {} ({}, {} bytes) uploaded by {}",
        file.id, file.name, file.size, actor.email
    );

    (StatusCode::CREATED, Json(file))
}

/// PUT /files/{id}
pub async fn update_file(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    RecordPath(id): RecordPath,
    JsonBody(update): JsonBody<FileUpdate>,
) -> ApiResult<Json<FileSummary>> {
    let file = state.store.files.update(id, update).await?;
    info!("File {} updated by {}", id, actor.email);

    Ok(Json(FileSummary::from(file)))
}

/// DELETE /files/{id}
pub async fn delete_file(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    RecordPath(id): RecordPath,
) -> ApiResult<StatusCode> {
    state.store.files.delete(id).await?;
    info!("File {} deleted by {}", id, actor.email);

    Ok(StatusCode::NO_CONTENT)
}
