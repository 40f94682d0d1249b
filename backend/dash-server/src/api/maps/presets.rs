//! Custom map location ("preset") handlers

use crate::{ApiResult, AppState, CurrentUser, JsonBody, OkResponse, RecordPath};

use dash_core::{PresetFields, PresetRecord};

use axum::{Json, extract::State};
use log::info;

/// GET /maps/custom
pub async fn list_presets(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Json<Vec<PresetRecord>> {
    Json(state.store.presets.list().await)
}

/// POST /maps/custom
pub async fn create_preset(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    JsonBody(fields): JsonBody<PresetFields>,
) -> Json<PresetRecord> {
    let preset = state.store.presets.create(fields).await;
    info!("Preset {} created by {}", preset.id, actor.email);

    Json(preset)
}

/// PUT /maps/custom/{id}
pub async fn update_preset(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    RecordPath(id): RecordPath,
    JsonBody(patch): JsonBody<PresetFields>,
) -> ApiResult<Json<PresetRecord>> {
    let preset = state.store.presets.update(id, patch).await?;
    info!("Preset {} updated by {}", id, actor.email);

    Ok(Json(preset))
}

/// DELETE /maps/custom/{id}
pub async fn delete_preset(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    RecordPath(id): RecordPath,
) -> ApiResult<Json<OkResponse>> {
    state.store.presets.delete(id).await?;
    info!("Preset {} deleted by {}", id, actor.email);

    Ok(Json(OkResponse::default()))
}
