use crate::model::student::Student as StudentModel;
use anyhow::Result;
use async_trait::async_trait;
use shared::{
    domain::requests::student::{CreateStudentRequest, UpdateStudentRequest},
    errors::RepositoryError,
};
use std::sync::Arc;

pub type DynStudentCommandRepository = Arc<dyn StudentCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait StudentCommandRepositoryTrait {
    async fn create_student(
        &self,
        req: &CreateStudentRequest,
    ) -> Result<StudentModel, RepositoryError>;
    /// `profile_image: None` leaves the stored image untouched.
    async fn update_student(
        &self,
        req: &UpdateStudentRequest,
    ) -> Result<StudentModel, RepositoryError>;
    async fn delete_student(&self, id: i32) -> Result<(), RepositoryError>;
}
