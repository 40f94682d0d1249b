//! Managed user REST API handlers

use crate::{ApiResult, AppState, CurrentUser, JsonBody, OkResponse, RecordPath};

use dash_core::{UserFields, UserRecord};

use axum::{Json, extract::State};
use log::info;

/// GET /users/
pub async fn list_users(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Json<Vec<UserRecord>> {
    Json(state.store.users.list().await)
}

/// POST /users/
pub async fn create_user(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    JsonBody(fields): JsonBody<UserFields>,
) -> Json<UserRecord> {
    let user = state.store.users.create(fields).await;
    info!("User {} created by {}", user.id, actor.email);

    Json(user)
}

/// PUT /users/{id}
///
/// Only the fields present in the body are changed.
pub async fn update_user(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    RecordPath(id): RecordPath,
    JsonBody(patch): JsonBody<UserFields>,
) -> ApiResult<Json<UserRecord>> {
    let user = state.store.users.update(id, patch).await?;
    info!("User {} updated by {}", id, actor.email);

    Ok(Json(user))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    RecordPath(id): RecordPath,
) -> ApiResult<Json<OkResponse>> {
    state.store.users.delete(id).await?;
    info!("User {} deleted by {}", id, actor.email);

    Ok(Json(OkResponse::default()))
}
