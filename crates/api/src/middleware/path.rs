use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use shared::errors::HttpError;

/// Integer row id taken from the single path parameter of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub i32);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;

        Ok(Self(id))
    }
}
