use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use shared::{
    errors::HttpError,
    validation::{field_messages, flatten_errors},
};
use validator::Validate;

/// JSON body that has already passed its `Validate` rules.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    HttpError::PayloadTooLarge(rejection.body_text())
                } else {
                    HttpError::BadRequest(rejection.body_text())
                }
            })?;

        value.validate().map_err(|errors| {
            let message = flatten_errors(&errors).join("; ");
            HttpError::Validation(message, Some(json!(field_messages(&errors))))
        })?;

        Ok(Self(value))
    }
}
