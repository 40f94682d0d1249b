//! Self-service profile of the authenticated identity

use crate::{AppState, CurrentUser, JsonBody};

use dash_core::{Profile, ProfileUpdate};

use axum::{Json, extract::State};
use log::info;

/// GET /users/me
pub async fn get_me(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> Json<Profile> {
    Json(state.store.profiles.profile(&identity).await)
}

/// PUT /users/me
pub async fn update_me(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    JsonBody(update): JsonBody<ProfileUpdate>,
) -> Json<Profile> {
    let profile = state.store.profiles.update(&identity, update).await;
    info!("Profile of {} updated", identity.email);

    Json(profile)
}
