use crate::{
    abstract_trait::DynResourceClient,
    config::Config,
    service::{StudentsApiClient, UsersApiClient},
    view::{Students, Users},
};
use std::{fmt, sync::Arc};

/// Process-wide dependencies. View state lives per request, never here.
pub struct AppState {
    pub user_client: DynResourceClient<Users>,
    pub student_client: DynResourceClient<Students>,
    pub api_public_url: String,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("api_public_url", &self.api_public_url)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::new();

        let user_client: DynResourceClient<Users> =
            Arc::new(UsersApiClient::new(http.clone(), config.api_url.clone()));
        let student_client: DynResourceClient<Students> =
            Arc::new(StudentsApiClient::new(http, config.api_url.clone()));

        Self::with_clients(user_client, student_client, config.api_public_url.clone())
    }

    pub fn with_clients(
        user_client: DynResourceClient<Users>,
        student_client: DynResourceClient<Students>,
        api_public_url: impl Into<String>,
    ) -> Self {
        Self {
            user_client,
            student_client,
            api_public_url: api_public_url.into(),
        }
    }
}
