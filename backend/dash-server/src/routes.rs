use crate::{
    AppState, create_preset, create_shapes, create_user, delete_file, delete_preset,
    delete_shape, delete_user, geojson, get_file, get_me, health, history, list_files,
    list_presets, list_shapes, list_users, login, update_file, update_me, update_preset,
    update_shape, update_user, upload_file,
};

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post, put},
};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

/// Build the application router with all endpoints
///
/// `allowed_origin` is the single origin granted cross-origin access, with
/// credentials.
pub fn build_router(state: AppState, allowed_origin: HeaderValue) -> Router {
    Router::new()
        // Unauthenticated endpoints
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/auth/login", post(login))
        // Users
        .route("/users/", get(list_users).post(create_user))
        .route("/users/me", get(get_me).put(update_me))
        .route("/users/{id}", put(update_user).delete(delete_user))
        // Files
        .route("/files/", get(list_files).post(upload_file))
        .route(
            "/files/{id}",
            get(get_file).put(update_file).delete(delete_file),
        )
        // Maps
        .route("/maps/history", get(history))
        .route("/maps/geojson", get(geojson))
        .route("/maps/custom", get(list_presets).post(create_preset))
        .route(
            "/maps/custom/{id}",
            put(update_preset).delete(delete_preset),
        )
        .route("/maps/shapes", get(list_shapes).post(create_shapes))
        .route("/maps/shapes/{id}", put(update_shape).delete(delete_shape))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(allowed_origin)
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true),
        )
}
