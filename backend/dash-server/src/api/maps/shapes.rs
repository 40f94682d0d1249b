//! User-drawn map shape handlers

use crate::{ApiResult, AppState, CurrentUser, JsonBody, OkResponse, RecordPath};

use dash_core::{ShapeFields, ShapeRecord};

use axum::{Json, extract::State};
use log::info;

/// GET /maps/shapes
pub async fn list_shapes(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Json<Vec<ShapeRecord>> {
    Json(state.store.shapes.list().await)
}

/// POST /maps/shapes
///
/// Appends every shape in the body, each with a fresh id, and returns the
/// whole collection. Existing shapes are never replaced.
pub async fn create_shapes(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    JsonBody(drafts): JsonBody<Vec<ShapeFields>>,
) -> Json<Vec<ShapeRecord>> {
    let count = drafts.len();
    let shapes = state.store.shapes.create_many(drafts).await;
    info!("{} shape(s) added by {}", count, actor.email);

    Json(shapes)
}

/// PUT /maps/shapes/{id}
pub async fn update_shape(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    RecordPath(id): RecordPath,
    JsonBody(patch): JsonBody<ShapeFields>,
) -> ApiResult<Json<ShapeRecord>> {
    let shape = state.store.shapes.update(id, patch).await?;
    info!("Shape {} updated by {}", id, actor.email);

    Ok(Json(shape))
}

/// DELETE /maps/shapes/{id}
pub async fn delete_shape(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    RecordPath(id): RecordPath,
) -> ApiResult<Json<OkResponse>> {
    state.store.shapes.delete(id).await?;
    info!("Shape {} deleted by {}", id, actor.email);

    Ok(Json(OkResponse::default()))
}
