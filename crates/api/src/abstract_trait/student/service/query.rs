use anyhow::Result;
use async_trait::async_trait;
use shared::{domain::responses::StudentResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynStudentQueryService = Arc<dyn StudentQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait StudentQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<StudentResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<StudentResponse, ServiceError>;
}
