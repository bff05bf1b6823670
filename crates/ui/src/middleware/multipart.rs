use crate::{
    domain::{FormFile, StudentForm},
    errors::UiError,
};
use axum::{
    extract::{FromRequest, Multipart, Request, multipart::MultipartError},
    http::StatusCode,
};
use tracing::debug;

/// Browser submission of the student form.
pub struct StudentFormData(pub StudentForm);

impl<S> FromRequest<S> for StudentFormData
where
    S: Send + Sync,
{
    type Rejection = UiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| UiError::BadForm(rejection.body_text()))?;

        let mut form = StudentForm::default();

        while let Some(field) = multipart.next_field().await.map_err(form_error)? {
            let name = field.name().unwrap_or_default().to_string();

            match name.as_str() {
                "Name" => form.name = field.text().await.map_err(form_error)?,
                "Email" => form.email = field.text().await.map_err(form_error)?,
                "ProfileImage" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await.map_err(form_error)?;

                    // browsers send an empty part when no file was picked
                    if !file_name.is_empty() && !bytes.is_empty() {
                        form.image = Some(FormFile {
                            file_name,
                            content_type,
                            bytes,
                        });
                    }
                }
                other => debug!("Skipping unknown form field {other:?}"),
            }
        }

        Ok(Self(form))
    }
}

fn form_error(err: MultipartError) -> UiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UiError::TooLarge(err.body_text())
    } else {
        UiError::BadForm(err.body_text())
    }
}
