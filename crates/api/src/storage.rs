use crate::{
    abstract_trait::storage::UploadStoreTrait,
    domain::{StoredUpload, UploadedFile},
};
use async_trait::async_trait;
use chrono::Utc;
use shared::errors::ServiceError;
use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::{
    fs,
    io::{AsyncWrite, AsyncWriteExt},
};
use tracing::{error, info};
use uuid::Uuid;

pub const PUBLIC_PREFIX: &str = "/uploads";

/// Stores uploads on the local filesystem, served back under `/uploads`.
#[derive(Clone, Debug)]
pub struct LocalUploadStore {
    dir: PathBuf,
}

impl LocalUploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub async fn ensure_dir(&self) -> Result<(), ServiceError> {
        fs::create_dir_all(&self.dir).await.map_err(|e| {
            error!("❌ Failed to create upload dir {:?}: {:?}", self.dir, e);
            ServiceError::from(e)
        })
    }
}

/// Writes `bytes` to a freshly created file; on failure the partial file is
/// removed so nothing half-written stays in the upload dir.
async fn write_or_discard<W>(mut out: W, path: &Path, bytes: &[u8]) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let written: io::Result<()> = async {
        out.write_all(bytes).await?;
        out.flush().await
    }
    .await;

    if let Err(e) = written {
        drop(out);
        error!("❌ Failed to write upload {:?}: {:?}", path, e);
        if let Err(rm) = fs::remove_file(path).await {
            error!("❌ Failed to remove partial upload {:?}: {:?}", path, rm);
        }
        return Err(e);
    }

    Ok(())
}

/// `<unix-millis>-<32 hex chars>` plus the original extension, lower-cased,
/// when it is purely alphanumeric.
pub fn generate_file_name(original: &str) -> String {
    let ext = Path::new(original)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default();

    format!(
        "{}-{}{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple(),
        ext
    )
}

#[async_trait]
impl UploadStoreTrait for LocalUploadStore {
    async fn save(&self, file: &UploadedFile) -> Result<StoredUpload, ServiceError> {
        self.ensure_dir().await?;

        let file_name = generate_file_name(&file.file_name);
        let path = self.dir.join(&file_name);

        let out = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| {
                error!("❌ Failed to create upload {:?}: {:?}", path, e);
                ServiceError::from(e)
            })?;

        write_or_discard(out, &path, &file.bytes).await?;

        info!(
            "📁 Stored upload {} ({}, {} bytes) as {}",
            file.file_name,
            file.content_type.as_deref().unwrap_or("unknown type"),
            file.bytes.len(),
            file_name
        );

        Ok(StoredUpload {
            public_path: format!("{PUBLIC_PREFIX}/{file_name}"),
            file_name,
        })
    }

    async fn discard(&self, upload: &StoredUpload) -> Result<(), ServiceError> {
        let path = self.dir.join(&upload.file_name);

        fs::remove_file(&path).await.map_err(|e| {
            error!("❌ Failed to discard upload {:?}: {:?}", path, e);
            ServiceError::from(e)
        })?;

        info!("🧹 Discarded upload {}", upload.file_name);

        Ok(())
    }
}
