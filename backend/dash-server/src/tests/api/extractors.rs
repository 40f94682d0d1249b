use crate::{ApiError, AppState, CurrentUser};

use dash_auth::TokenService;
use dash_store::Store;

use std::time::Duration;

use axum::extract::FromRequestParts;
use http::{Request, header::AUTHORIZATION, request::Parts};

const SECRET: &str = "unit-test-secret-key-at-least-32-characters";

fn state() -> AppState {
    AppState::new(
        TokenService::with_hs256(SECRET.as_bytes(), Duration::from_secs(600)),
        Store::seeded(),
    )
}

fn parts(authorization: Option<&str>) -> Parts {
    let mut builder = Request::builder().uri("/users/me");
    if let Some(value) = authorization {
        builder = builder.header(AUTHORIZATION, value);
    }
    builder.body(()).unwrap().into_parts().0
}

#[tokio::test]
async fn given_valid_token_when_extracting_then_identity_resolved() {
    // Given
    let state = state();
    let identity = state.store.credentials.find("editor@example.com").unwrap();
    let token = state.tokens.issue(identity).unwrap();
    let mut parts = parts(Some(&format!("Bearer {}", token)));

    // When
    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    // Then
    let CurrentUser(resolved) = result.unwrap();
    assert_eq!(resolved.id, 2);
    assert_eq!(resolved.email, "editor@example.com");
}

#[tokio::test]
async fn given_lowercase_scheme_when_extracting_then_accepted() {
    // Given
    let state = state();
    let identity = state.store.credentials.find("admin@example.com").unwrap();
    let token = state.tokens.issue(identity).unwrap();
    let mut parts = parts(Some(&format!("bearer {}", token)));

    // When
    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    // Then
    assert!(result.is_ok());
}

#[tokio::test]
async fn given_no_header_when_extracting_then_unauthenticated() {
    // Given
    let state = state();
    let mut parts = parts(None);

    // When
    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    // Then
    assert!(matches!(result, Err(ApiError::Unauthenticated { .. })));
}

#[tokio::test]
async fn given_garbage_token_when_extracting_then_unauthenticated() {
    // Given
    let state = state();
    let mut parts = parts(Some("Bearer not.a.jwt"));

    // When
    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    // Then
    assert!(matches!(result, Err(ApiError::Unauthenticated { .. })));
}
