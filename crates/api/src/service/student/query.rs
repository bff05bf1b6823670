use crate::abstract_trait::student::{
    repository::DynStudentQueryRepository, service::StudentQueryServiceTrait,
};
use anyhow::Result;
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    domain::responses::StudentResponse,
    errors::ServiceError,
    utils::{Method, Metrics, OperationContext},
};
use tracing::error;

#[derive(Clone)]
pub struct StudentQueryService {
    pub query: DynStudentQueryRepository,
    pub metrics: Metrics,
}

impl StudentQueryService {
    pub fn new(query: DynStudentQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("student_query_service", registry);

        Self { query, metrics }
    }
}

#[async_trait]
impl StudentQueryServiceTrait for StudentQueryService {
    async fn find_all(&self) -> Result<Vec<StudentResponse>, ServiceError> {
        let op = OperationContext::start("FindAllStudents", Method::Get);

        match self.query.find_all().await {
            Ok(students) => {
                op.success(&self.metrics, "Students retrieved");
                Ok(students.into_iter().map(StudentResponse::from).collect())
            }
            Err(e) => {
                error!("❌ Failed to fetch students: {e:?}");
                op.error(&self.metrics, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<StudentResponse, ServiceError> {
        let op = OperationContext::start("FindStudentById", Method::Get);

        match self.query.find_by_id(id).await {
            Ok(Some(student)) => {
                op.success(&self.metrics, "Student retrieved");
                Ok(StudentResponse::from(student))
            }
            Ok(None) => {
                op.error(&self.metrics, "Student not found");
                Err(ServiceError::NotFound(format!("Student {id} not found")))
            }
            Err(e) => {
                error!("❌ Failed to fetch student {id}: {e:?}");
                op.error(&self.metrics, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }
}
