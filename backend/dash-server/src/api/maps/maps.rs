//! Static map reference data

use crate::{AppState, CurrentUser};

use dash_core::{HistoryMarker, RegionFeatureCollection};

use axum::{Json, extract::State};

/// GET /maps/history
pub async fn history(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Json<Vec<HistoryMarker>> {
    Json(state.store.reference.history.clone())
}

/// GET /maps/geojson
pub async fn geojson(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Json<RegionFeatureCollection> {
    Json(state.store.reference.regions.clone())
}
