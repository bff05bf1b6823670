use crate::model::user::User as UserModel;
use anyhow::Result;
use async_trait::async_trait;
use shared::{
    domain::requests::user::{CreateUserRequest, UpdateUserRequest},
    errors::RepositoryError,
};
use std::sync::Arc;

pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserCommandRepositoryTrait {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError>;
    /// Overwrites every column of `req.userid`; `NotFound` when no row matched.
    async fn update_user(&self, req: &UpdateUserRequest) -> Result<UserModel, RepositoryError>;
    async fn delete_user(&self, id: i32) -> Result<(), RepositoryError>;
}
