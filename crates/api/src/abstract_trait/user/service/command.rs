use anyhow::Result;
use async_trait::async_trait;
use shared::{
    domain::{
        requests::user::{CreateUserRequest, UpdateUserRequest},
        responses::{ApiResponse, MessageResponse, UserResponse},
    },
    errors::ServiceError,
};
use std::sync::Arc;

pub type DynUserCommandService = Arc<dyn UserCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserCommandServiceTrait {
    async fn create_user(
        &self,
        req: &CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
    /// Returns the request echoed back with `userid` filled in.
    async fn update_user(&self, req: &UpdateUserRequest)
    -> Result<UpdateUserRequest, ServiceError>;
    async fn delete_user(&self, id: i32) -> Result<MessageResponse, ServiceError>;
}
