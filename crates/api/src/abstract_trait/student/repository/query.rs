use crate::model::student::Student as StudentModel;
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynStudentQueryRepository = Arc<dyn StudentQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait StudentQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<StudentModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<StudentModel>, RepositoryError>;
}
