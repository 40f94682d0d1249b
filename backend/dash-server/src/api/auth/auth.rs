//! Login handler
//!
//! Exchanges an email/password pair for a signed access token.

use crate::api::auth::login_response::TOKEN_TYPE_BEARER;
use crate::{ApiResult, AppState, AuthenticatedUser, JsonBody, LoginRequest, LoginResponse};

use axum::{Json, extract::State};
use log::{info, warn};

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let identity = state
        .store
        .credentials
        .authenticate(&request.email, &request.password)
        .inspect_err(|_| warn!("Failed login attempt for {}", request.email))?;

    let access_token = state.tokens.issue(identity)?;
    info!("{} logged in", identity.email);

    Ok(Json(LoginResponse {
        access_token,
        token_type: TOKEN_TYPE_BEARER,
        user: AuthenticatedUser::from(identity),
    }))
}
