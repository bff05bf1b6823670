use super::ensure_success;
use crate::{
    abstract_trait::ResourceClientTrait, domain::UserForm, errors::ClientError, view::Users,
};
use async_trait::async_trait;
use reqwest::Client;
use shared::domain::responses::UserResponse;
use tracing::info;

#[derive(Clone)]
pub struct UsersApiClient {
    http: Client,
    base_url: String,
}

impl UsersApiClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl ResourceClientTrait<Users> for UsersApiClient {
    async fn list(&self) -> Result<Vec<UserResponse>, ClientError> {
        let response = self.http.get(self.url("/users")).send().await?;
        let users = ensure_success(response).await?.json().await?;
        Ok(users)
    }

    async fn create(&self, form: &UserForm) -> Result<(), ClientError> {
        info!("📤 Creating user {}", form.username);

        let response = self
            .http
            .post(self.url("/users"))
            .json(&form.to_create())
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }

    async fn update(&self, id: i32, form: &UserForm) -> Result<(), ClientError> {
        info!("📤 Updating user {id}");

        let response = self
            .http
            .put(self.url(&format!("/users/{id}")))
            .json(&form.to_update(id))
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), ClientError> {
        info!("📤 Deleting user {id}");

        let response = self
            .http
            .delete(self.url(&format!("/users/{id}")))
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }
}
