use crate::abstract_trait::user::{
    repository::DynUserCommandRepository, service::UserCommandServiceTrait,
};
use anyhow::Result;
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    domain::{
        requests::user::{CreateUserRequest, UpdateUserRequest},
        responses::{ApiResponse, MessageResponse, UserResponse},
    },
    errors::ServiceError,
    utils::{Method, Metrics, OperationContext},
};
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct UserCommandService {
    pub command: DynUserCommandRepository,
    pub metrics: Metrics,
}

impl UserCommandService {
    pub fn new(command: DynUserCommandRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("user_command_service", registry);

        Self { command, metrics }
    }
}

#[async_trait]
impl UserCommandServiceTrait for UserCommandService {
    async fn create_user(
        &self,
        req: &CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("🏗️ Creating new user: {}", req.username);

        let op = OperationContext::start("CreateUser", Method::Post);

        if let Err(errors) = req.validate() {
            op.error(&self.metrics, "Validation failed");
            return Err(ServiceError::from(errors));
        }

        match self.command.create_user(req).await {
            Ok(user) => {
                op.success(&self.metrics, "User saved successfully");
                Ok(ApiResponse::success(
                    "User saved successfully",
                    UserResponse::from(user),
                ))
            }
            Err(e) => {
                error!("❌ Failed to create user '{}': {e:?}", req.username);
                op.error(&self.metrics, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn update_user(
        &self,
        req: &UpdateUserRequest,
    ) -> Result<UpdateUserRequest, ServiceError> {
        info!("✏️ Updating user {:?}", req.userid);

        let op = OperationContext::start("UpdateUser", Method::Put);

        if req.userid.is_none() {
            error!("❌ Update user failed: userid is missing in the request");
            op.error(&self.metrics, "Missing userid");
            return Err(ServiceError::Internal("userid is required".into()));
        }

        if let Err(errors) = req.validate() {
            op.error(&self.metrics, "Validation failed");
            return Err(ServiceError::from(errors));
        }

        match self.command.update_user(req).await {
            Ok(user) => {
                op.success(&self.metrics, "User updated");
                info!("✅ User {} updated", user.userid);
                Ok(req.clone())
            }
            Err(e) => {
                error!("❌ Failed to update user {:?}: {e:?}", req.userid);
                op.error(&self.metrics, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn delete_user(&self, id: i32) -> Result<MessageResponse, ServiceError> {
        info!("🗑️ Deleting user {id}");

        let op = OperationContext::start("DeleteUser", Method::Delete);

        match self.command.delete_user(id).await {
            Ok(()) => {
                op.success(&self.metrics, "User deleted");
                Ok(MessageResponse::success("User deleted"))
            }
            Err(e) => {
                error!("❌ Failed to delete user {id}: {e:?}");
                op.error(&self.metrics, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }
}
