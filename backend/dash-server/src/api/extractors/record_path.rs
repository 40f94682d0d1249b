use crate::ApiError;

use dash_core::RecordId;

use std::future::Future;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Integer `{id}` path segment. Non-integer ids are rejected with 422; any
/// integer, negative included, reaches the collection and may be a 404.
#[derive(Debug, Clone, Copy)]
pub struct RecordPath(pub RecordId);

impl<S> FromRequestParts<S> for RecordPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Path(id) = Path::<RecordId>::from_request_parts(parts, state).await?;
            Ok(RecordPath(id))
        }
    }
}
