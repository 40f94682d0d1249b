use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET / - Banner used by the dashboard to detect the API
pub async fn root() -> Response {
    Json(json!({ "message": "Admin Dashboard API is running" })).into_response()
}

/// GET /health - Service status with collection sizes
pub async fn health_check(State(state): State<AppState>) -> Response {
    let store = &state.store;

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "collections": {
            "users": store.users.len().await,
            "files": store.files.len().await,
            "presets": store.presets.len().await,
            "shapes": store.shapes.len().await,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}
