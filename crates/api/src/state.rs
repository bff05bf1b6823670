use crate::{
    config::Config,
    di::{DependenciesInject, DependenciesInjectDeps},
    storage::LocalUploadStore,
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub upload_dir: PathBuf,
    pub max_upload_size: usize,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .field("upload_dir", &self.upload_dir)
            .field("max_upload_size", &self.max_upload_size)
            .finish()
    }
}

impl AppState {
    pub async fn new(pool: ConnectionPool, config: &Config) -> Result<Self> {
        let store = LocalUploadStore::new(config.upload_dir.clone());

        store
            .ensure_dir()
            .await
            .context("Failed to prepare upload directory")?;

        let deps = DependenciesInjectDeps::from_pool(pool, Arc::new(store));

        Ok(Self::from_deps(
            deps,
            config.upload_dir.clone(),
            config.max_upload_size,
        ))
    }

    pub fn from_deps(
        deps: DependenciesInjectDeps,
        upload_dir: PathBuf,
        max_upload_size: usize,
    ) -> Self {
        let mut registry = Registry::default();
        let di_container = DependenciesInject::new(deps, &mut registry);

        Self {
            di_container,
            registry: Arc::new(Mutex::new(registry)),
            upload_dir,
            max_upload_size,
        }
    }
}
