//! Bearer-token authentication for REST handlers

use crate::api::error::INVALID_TOKEN;
use crate::{ApiError, AppState};

use dash_auth::bearer_token;
use dash_core::Identity;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

/// The authenticated caller.
///
/// Rejects with 401 unless the request carries a valid, unexpired bearer
/// token whose subject is a known identity.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Identity);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = bearer_token(&parts.headers)?;
            let claims = state.tokens.verify(token)?;

            let identity = state.store.credentials.find(&claims.sub).ok_or_else(|| {
                ApiError::Unauthenticated {
                    message: INVALID_TOKEN.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

            log::debug!("Authenticated {} ({})", identity.email, identity.role);

            Ok(CurrentUser(identity.clone()))
        }
    }
}
