use crate::ApiError;

use dash_auth::AuthError;
use dash_store::StoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::{StatusCode, header::WWW_AUTHENTICATE};
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, http::HeaderMap, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_with_detail() {
    // Given
    let error = ApiError::NotFound {
        message: "User not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (status, _, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({ "detail": "User not found" }));
}

#[tokio::test]
async fn given_invalid_credentials_when_rendered_then_401_with_login_message() {
    // Given
    let error = ApiError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (status, headers, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["detail"], "Invalid email or password");
    assert_eq!(headers[WWW_AUTHENTICATE], "Bearer");
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_422() {
    // Given
    let error = ApiError::Validation {
        message: "missing field `email`".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (status, _, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["detail"], "missing field `email`");
}

#[tokio::test]
async fn given_internal_error_when_rendered_then_500_without_details() {
    // Given
    let error = ApiError::Internal {
        message: "signing key rejected".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (status, _, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["detail"], "Internal server error");
}

#[test]
fn given_store_not_found_when_converted_then_message_names_entity() {
    // Given
    let error = StoreError::NotFound {
        entity: "Shape",
        id: 4,
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let api_error = ApiError::from(error);

    // Then
    match api_error {
        ApiError::NotFound { message, .. } => assert_eq!(message, "Shape not found"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn given_missing_header_when_converted_then_not_authenticated() {
    // Given
    let error = AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let api_error = ApiError::from(error);

    // Then
    match api_error {
        ApiError::Unauthenticated { message, .. } => assert_eq!(message, "Not authenticated"),
        other => panic!("expected Unauthenticated, got {other:?}"),
    }
}

#[test]
fn given_expired_token_when_converted_then_invalid_token() {
    // Given
    let error = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let api_error = ApiError::from(error);

    // Then
    assert_eq!(api_error.status(), StatusCode::UNAUTHORIZED);
    match api_error {
        ApiError::Unauthenticated { message, .. } => assert_eq!(message, "Invalid token"),
        other => panic!("expected Unauthenticated, got {other:?}"),
    }
}
