#![allow(dead_code)]

//! Test infrastructure for dash-server API tests

use dash_auth::TokenService;
use dash_server::{AppState, build_router};
use dash_store::Store;

use std::time::Duration;

use axum::{Router, http::HeaderValue};
use axum_test::TestServer;

pub const TEST_JWT_SECRET: &str = "test-secret-key-that-is-at-least-32-chars";
pub const TEST_ORIGIN: &str = "http://localhost:5173";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const EDITOR_EMAIL: &str = "editor@example.com";
pub const DEMO_PASSWORD: &str = "password123";

/// AppState over freshly seeded data
pub fn create_test_app_state() -> AppState {
    AppState::new(
        TokenService::with_hs256(TEST_JWT_SECRET.as_bytes(), Duration::from_secs(3600)),
        Store::seeded(),
    )
}

pub fn create_test_router(state: AppState) -> Router {
    build_router(state, HeaderValue::from_static(TEST_ORIGIN))
}

pub struct TestServerWithState {
    pub server: TestServer,
    pub app_state: AppState,
}

/// TestServer over a freshly seeded store
pub fn create_test_server() -> TestServerWithState {
    let app_state = create_test_app_state();
    let server = TestServer::builder()
        .build(create_test_router(app_state.clone()))
        .expect("Failed to create test server");

    TestServerWithState { server, app_state }
}

/// Token for a seeded identity, issued directly by the state's token service
pub fn token_for(state: &AppState, email: &str) -> String {
    let identity = state
        .store
        .credentials
        .find(email)
        .expect("seeded identity");
    state.tokens.issue(identity).expect("token issued")
}

pub fn admin_token(state: &AppState) -> String {
    token_for(state, ADMIN_EMAIL)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
