use crate::{errors::ClientError, view::Resource};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynResourceClient<R> = Arc<dyn ResourceClientTrait<R> + Send + Sync>;

/// Remote collection behind one view.
#[async_trait]
pub trait ResourceClientTrait<R: Resource> {
    async fn list(&self) -> Result<Vec<R::Record>, ClientError>;
    async fn create(&self, form: &R::Form) -> Result<(), ClientError>;
    async fn update(&self, id: i32, form: &R::Form) -> Result<(), ClientError>;
    async fn delete(&self, id: i32) -> Result<(), ClientError>;
}
