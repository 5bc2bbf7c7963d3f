use crate::error::StoreError;
use crate::models::PropertyRecord;
use crate::store::types::StoreQuery;
use async_trait::async_trait;

/// Common trait for all property sources
/// Backends: a JSON file, an in-memory set, or the hosted REST database
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// List properties matching the server-side pre-filter, newest first
    async fn list(&self, query: &StoreQuery) -> Result<Vec<PropertyRecord>, StoreError>;

    /// Fetch one property by id
    async fn get(&self, id: &str) -> Result<Option<PropertyRecord>, StoreError>;

    /// Get the name of the store backend
    fn source_name(&self) -> &'static str;
}
