use crate::error::StoreError;
use crate::models::PropertyRecord;
use crate::store::traits::PropertyStore;
use crate::store::types::StoreQuery;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Property store reading a JSON array of records from disk
///
/// The file is re-read on every call so edits show up without a restart.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<PropertyRecord>, StoreError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.display().to_string(),
                source,
            })?;

        debug!("Read {} bytes from {}", raw.len(), self.path.display());

        let records: Vec<PropertyRecord> = serde_json::from_str(&raw)?;
        Ok(records)
    }

    /// Write `records` as pretty JSON, replacing the file.
    pub async fn save(&self, records: &[PropertyRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        info!("💾 Saved {} properties to {}", records.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl PropertyStore for JsonFileStore {
    async fn list(&self, query: &StoreQuery) -> Result<Vec<PropertyRecord>, StoreError> {
        let records = self.load().await?;
        Ok(query.select(&records))
    }

    async fn get(&self, id: &str) -> Result<Option<PropertyRecord>, StoreError> {
        let records = self.load().await?;
        Ok(records.into_iter().find(|r| r.id == id))
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}
