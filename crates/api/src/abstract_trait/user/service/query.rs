use anyhow::Result;
use async_trait::async_trait;
use shared::{domain::responses::UserResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynUserQueryService = Arc<dyn UserQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<UserResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<UserResponse, ServiceError>;
}
