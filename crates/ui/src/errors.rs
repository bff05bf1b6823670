use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Failure talking to the admin API.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API responded {status}: {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Error)]
pub enum UiError {
    #[error("Failed to render page: {0}")]
    Render(#[from] askama::Error),

    #[error("Invalid form submission: {0}")]
    BadForm(String),

    #[error("Upload too large: {0}")]
    TooLarge(String),
}

impl IntoResponse for UiError {
    fn into_response(self) -> Response {
        let status = match &self {
            UiError::Render(e) => {
                error!("❌ Template rendering failed: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            UiError::BadForm(_) => StatusCode::BAD_REQUEST,
            UiError::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        };

        (status, self.to_string()).into_response()
    }
}
