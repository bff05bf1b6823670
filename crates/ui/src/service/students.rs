use super::ensure_success;
use crate::{
    abstract_trait::ResourceClientTrait,
    domain::StudentForm,
    errors::ClientError,
    view::Students,
};
use async_trait::async_trait;
use reqwest::{
    Client,
    multipart::{Form, Part},
};
use shared::domain::responses::StudentResponse;
use tracing::info;

#[derive(Clone)]
pub struct StudentsApiClient {
    http: Client,
    base_url: String,
}

impl StudentsApiClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Multipart body with `Name`, `Email` and, when attached, `ProfileImage`.
    fn multipart(form: &StudentForm) -> Result<Form, ClientError> {
        let mut body = Form::new()
            .text("Name", form.name.clone())
            .text("Email", form.email.clone());

        if let Some(file) = &form.image {
            let mut part = Part::bytes(file.bytes.to_vec()).file_name(file.file_name.clone());
            if let Some(content_type) = &file.content_type {
                part = part.mime_str(content_type)?;
            }
            body = body.part("ProfileImage", part);
        }

        Ok(body)
    }
}

#[async_trait]
impl ResourceClientTrait<Students> for StudentsApiClient {
    async fn list(&self) -> Result<Vec<StudentResponse>, ClientError> {
        let response = self.http.get(self.url("/student")).send().await?;
        let students = ensure_success(response).await?.json().await?;
        Ok(students)
    }

    async fn create(&self, form: &StudentForm) -> Result<(), ClientError> {
        info!("📤 Creating student {}", form.email);

        let response = self
            .http
            .post(self.url("/student"))
            .multipart(Self::multipart(form)?)
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }

    async fn update(&self, id: i32, form: &StudentForm) -> Result<(), ClientError> {
        info!("📤 Updating student {id}");

        let response = self
            .http
            .put(self.url(&format!("/student/{id}")))
            .multipart(Self::multipart(form)?)
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), ClientError> {
        info!("📤 Deleting student {id}");

        let response = self
            .http
            .delete(self.url(&format!("/student/{id}")))
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }
}
