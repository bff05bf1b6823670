use crate::domain::{StudentForm, UploadedFile};
use axum::{
    extract::{FromRequest, Multipart, Request, multipart::MultipartError},
    http::StatusCode,
};
use shared::errors::HttpError;
use tracing::debug;

pub const NAME_FIELD: &str = "Name";
pub const EMAIL_FIELD: &str = "Email";
pub const IMAGE_FIELD: &str = "ProfileImage";

/// `multipart/form-data` student body. Unknown parts are skipped; a file part
/// without a name or without content counts as no file.
pub struct StudentMultipart(pub StudentForm);

impl<S> FromRequest<S> for StudentMultipart
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;

        let mut form = StudentForm::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();

            match name.as_str() {
                NAME_FIELD => form.name = field.text().await.map_err(multipart_error)?,
                EMAIL_FIELD => form.email = field.text().await.map_err(multipart_error)?,
                IMAGE_FIELD => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await.map_err(multipart_error)?;

                    form.image = if file_name.is_empty() || bytes.is_empty() {
                        None
                    } else {
                        Some(UploadedFile {
                            file_name,
                            content_type,
                            bytes,
                        })
                    };
                }
                other => debug!("Skipping unknown multipart field {other:?}"),
            }
        }

        Ok(Self(form))
    }
}

fn multipart_error(err: MultipartError) -> HttpError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        HttpError::PayloadTooLarge(err.body_text())
    } else {
        HttpError::BadRequest(err.body_text())
    }
}
