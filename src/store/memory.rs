use crate::error::StoreError;
use crate::models::PropertyRecord;
use crate::store::traits::PropertyStore;
use crate::store::types::StoreQuery;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

/// Property store backed by a vector held in memory
#[derive(Default)]
pub struct InMemoryStore {
    records: RwLock<Vec<PropertyRecord>>,
}

impl InMemoryStore {
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Insert or replace a record by id
    pub async fn upsert(&self, record: PropertyRecord) {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
    }

    pub async fn remove(&self, id: &str) -> Result<PropertyRecord, StoreError> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(records.remove(index))
    }
}

#[async_trait]
impl PropertyStore for InMemoryStore {
    async fn list(&self, query: &StoreQuery) -> Result<Vec<PropertyRecord>, StoreError> {
        let records = self.records.read().await;
        let selected = query.select(&records);
        debug!("In-memory store returned {} of {} records", selected.len(), records.len());
        Ok(selected)
    }

    async fn get(&self, id: &str) -> Result<Option<PropertyRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    fn source_name(&self) -> &'static str {
        "memory"
    }
}
