use crate::abstract_trait::user::{
    repository::DynUserQueryRepository, service::UserQueryServiceTrait,
};
use anyhow::Result;
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    domain::responses::UserResponse,
    errors::ServiceError,
    utils::{Method, Metrics, OperationContext},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct UserQueryService {
    pub query: DynUserQueryRepository,
    pub metrics: Metrics,
}

impl UserQueryService {
    pub fn new(query: DynUserQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("user_query_service", registry);

        Self { query, metrics }
    }
}

#[async_trait]
impl UserQueryServiceTrait for UserQueryService {
    async fn find_all(&self) -> Result<Vec<UserResponse>, ServiceError> {
        let op = OperationContext::start("FindAllUsers", Method::Get);

        match self.query.find_all().await {
            Ok(users) => {
                op.success(&self.metrics, "Users retrieved");
                Ok(users.into_iter().map(UserResponse::from).collect())
            }
            Err(e) => {
                error!("❌ Failed to fetch users: {e:?}");
                op.error(&self.metrics, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<UserResponse, ServiceError> {
        info!("🔍 Finding user by id {id}");

        let op = OperationContext::start("FindUserById", Method::Get);

        match self.query.find_by_id(id).await {
            Ok(Some(user)) => {
                op.success(&self.metrics, "User retrieved");
                Ok(UserResponse::from(user))
            }
            Ok(None) => {
                op.error(&self.metrics, "User not found");
                Err(ServiceError::NotFound(format!("User {id} not found")))
            }
            Err(e) => {
                error!("❌ Failed to fetch user {id}: {e:?}");
                op.error(&self.metrics, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }
}
