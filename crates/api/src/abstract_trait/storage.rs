use crate::domain::{StoredUpload, UploadedFile};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynUploadStore = Arc<dyn UploadStoreTrait + Send + Sync>;

#[async_trait]
pub trait UploadStoreTrait {
    /// Persists the file under a fresh, never-reused name.
    async fn save(&self, file: &UploadedFile) -> Result<StoredUpload, ServiceError>;

    /// Removes an upload whose row was never written.
    async fn discard(&self, upload: &StoredUpload) -> Result<(), ServiceError>;
}
