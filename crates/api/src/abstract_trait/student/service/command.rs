use crate::domain::StudentForm;
use anyhow::Result;
use async_trait::async_trait;
use shared::{
    domain::responses::{MessageResponse, StudentResponse},
    errors::ServiceError,
};
use std::sync::Arc;

pub type DynStudentCommandService = Arc<dyn StudentCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait StudentCommandServiceTrait {
    async fn create_student(&self, form: StudentForm) -> Result<StudentResponse, ServiceError>;
    async fn update_student(
        &self,
        id: i32,
        form: StudentForm,
    ) -> Result<MessageResponse, ServiceError>;
    async fn delete_student(&self, id: i32) -> Result<MessageResponse, ServiceError>;
}
