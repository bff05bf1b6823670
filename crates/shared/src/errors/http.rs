use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::error;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Validation(String, Option<Value>),
    NotFound(String),
    PayloadTooLarge(String),
    Database(String),
    Internal(String),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) | HttpError::Validation(..) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            HttpError::Database(_) | HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            HttpError::BadRequest(_) => "bad_request",
            HttpError::Validation(..) => "validation",
            HttpError::NotFound(_) => "not_found",
            HttpError::PayloadTooLarge(_) => "payload_too_large",
            HttpError::Database(_) => "database",
            HttpError::Internal(_) => "internal",
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::Sqlx(e) => {
                    error!("❌ Database error: {e:?}");
                    HttpError::Database("Database error".into())
                }
                RepositoryError::Custom(msg) => HttpError::Internal(msg),
            },

            ServiceError::Validation(errors) => {
                let message = errors.join("; ");
                HttpError::Validation(message, Some(Value::from(errors)))
            }

            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::Storage(msg) => {
                error!("❌ Storage error: {msg}");
                HttpError::Internal("Failed to store uploaded file".into())
            }

            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind().to_string();

        let (message, details) = match self {
            HttpError::Validation(msg, details) => (msg, details),
            HttpError::BadRequest(msg)
            | HttpError::NotFound(msg)
            | HttpError::PayloadTooLarge(msg)
            | HttpError::Database(msg)
            | HttpError::Internal(msg) => (msg, None),
        };

        let body = Json(ErrorResponse {
            kind,
            message,
            details,
        });

        (status, body).into_response()
    }
}
