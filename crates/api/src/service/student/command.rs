use crate::{
    abstract_trait::{
        storage::DynUploadStore,
        student::{repository::DynStudentCommandRepository, service::StudentCommandServiceTrait},
    },
    domain::{StoredUpload, StudentForm, UploadedFile},
};
use anyhow::Result;
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    domain::{
        requests::student::{CreateStudentRequest, UpdateStudentRequest},
        responses::{MessageResponse, StudentResponse},
    },
    errors::ServiceError,
    utils::{Method, Metrics, OperationContext},
};
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct StudentCommandService {
    pub command: DynStudentCommandRepository,
    pub store: DynUploadStore,
    pub metrics: Metrics,
}

pub struct StudentCommandServiceDeps {
    pub command: DynStudentCommandRepository,
    pub store: DynUploadStore,
}

impl StudentCommandService {
    pub fn new(deps: StudentCommandServiceDeps, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("student_command_service", registry);

        let StudentCommandServiceDeps { command, store } = deps;

        Self {
            command,
            store,
            metrics,
        }
    }

    async fn store_image(
        &self,
        image: Option<&UploadedFile>,
    ) -> Result<Option<StoredUpload>, ServiceError> {
        match image {
            Some(file) => Ok(Some(self.store.save(file).await?)),
            None => Ok(None),
        }
    }

    // the row write failed, so the file it would have pointed at is dropped
    async fn discard_image(&self, stored: Option<&StoredUpload>) {
        if let Some(upload) = stored {
            if let Err(e) = self.store.discard(upload).await {
                error!("❌ Orphan upload left behind {}: {e}", upload.file_name);
            }
        }
    }
}

#[async_trait]
impl StudentCommandServiceTrait for StudentCommandService {
    async fn create_student(&self, form: StudentForm) -> Result<StudentResponse, ServiceError> {
        info!("🏗️ Creating new student: {}", form.email);

        let op = OperationContext::start("CreateStudent", Method::Post);

        let mut req = CreateStudentRequest {
            name: form.name,
            email: form.email,
            profile_image: None,
        };

        if let Err(errors) = req.validate() {
            op.error(&self.metrics, "Validation failed");
            return Err(ServiceError::from(errors));
        }

        let stored = match self.store_image(form.image.as_ref()).await {
            Ok(stored) => stored,
            Err(e) => {
                op.error(&self.metrics, &e.to_string());
                return Err(e);
            }
        };
        req.profile_image = stored.as_ref().map(|s| s.public_path.clone());

        match self.command.create_student(&req).await {
            Ok(student) => {
                op.success(&self.metrics, "Student created");
                Ok(StudentResponse::from(student))
            }
            Err(e) => {
                error!("❌ Failed to create student '{}': {e:?}", req.email);
                self.discard_image(stored.as_ref()).await;
                op.error(&self.metrics, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn update_student(
        &self,
        id: i32,
        form: StudentForm,
    ) -> Result<MessageResponse, ServiceError> {
        info!("✏️ Updating student {id}");

        let op = OperationContext::start("UpdateStudent", Method::Put);

        let mut req = UpdateStudentRequest {
            id,
            name: form.name,
            email: form.email,
            profile_image: None,
        };

        if let Err(errors) = req.validate() {
            op.error(&self.metrics, "Validation failed");
            return Err(ServiceError::from(errors));
        }

        let stored = match self.store_image(form.image.as_ref()).await {
            Ok(stored) => stored,
            Err(e) => {
                op.error(&self.metrics, &e.to_string());
                return Err(e);
            }
        };
        req.profile_image = stored.as_ref().map(|s| s.public_path.clone());

        match self.command.update_student(&req).await {
            Ok(_) => {
                op.success(&self.metrics, "Student updated successfully");
                Ok(MessageResponse::success("Student updated successfully"))
            }
            Err(e) => {
                error!("❌ Failed to update student {id}: {e:?}");
                self.discard_image(stored.as_ref()).await;
                op.error(&self.metrics, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn delete_student(&self, id: i32) -> Result<MessageResponse, ServiceError> {
        info!("🗑️ Deleting student {id}");

        let op = OperationContext::start("DeleteStudent", Method::Delete);

        match self.command.delete_student(id).await {
            Ok(()) => {
                op.success(&self.metrics, "Student deleted successfully");
                Ok(MessageResponse::success("Student deleted successfully"))
            }
            Err(e) => {
                error!("❌ Failed to delete student {id}: {e:?}");
                op.error(&self.metrics, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }
}
