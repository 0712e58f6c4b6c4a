use crate::errors::AppError;
use crate::models::ReportCatalog;
use async_trait::async_trait;
use std::{env, path::PathBuf};
use tokio::fs;
use tracing::error;

/// Where the report catalog comes from. The production source reads the
/// JSON file the batch job writes; tests substitute an in-memory
/// fixture.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<ReportCatalog, AppError>;
}

pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn load(&self) -> Result<ReportCatalog, AppError> {
        let bytes = fs::read(&self.path).await.map_err(|err| {
            error!("failed to read catalog file {}: {err}", self.path.display());
            AppError::internal(err)
        })?;
        serde_json::from_slice(&bytes).map_err(|err| {
            error!("failed to parse catalog file {}: {err}", self.path.display());
            AppError::internal(err)
        })
    }
}

pub fn resolve_config_path() -> PathBuf {
    if let Ok(path) = env::var("REPORTS_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("config/reports.json")
}
