mod students;
mod users;

pub use self::students::StudentsApiClient;
pub use self::users::UsersApiClient;

use crate::errors::ClientError;
use reqwest::Response;
use serde::Deserialize;
use tracing::error;

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Turns a non-2xx answer into `ClientError::Api`, keeping the API's message
/// when the body is an error envelope.
async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|e| e.message)
        .unwrap_or(body);

    error!("❌ API call failed with {status}: {message}");

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
