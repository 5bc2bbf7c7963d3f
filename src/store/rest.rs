use crate::error::StoreError;
use crate::models::PropertyRecord;
use crate::store::traits::PropertyStore;
use crate::store::types::StoreQuery;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

const PROPERTIES_TABLE: &str = "properties";

/// Property store backed by the hosted database's REST interface
///
/// Filters are sent as `column=eq.value` pairs; results come back newest
/// first.
pub struct RestStore {
    client: Client,
    base_url: String,
}

impl RestStore {
    /// Create a REST store with the default 30 second timeout
    pub fn new(base_url: &str, api_key: Option<&str>) -> Result<Self, StoreError> {
        Self::with_timeout(base_url, api_key, Duration::from_secs(30))
    }

    pub fn with_timeout(
        base_url: &str,
        api_key: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = api_key {
            let apikey = HeaderValue::from_str(key).map_err(|_| StoreError::InvalidApiKey)?;
            let bearer = HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|_| StoreError::InvalidApiKey)?;
            headers.insert("apikey", apikey);
            headers.insert(AUTHORIZATION, bearer);
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("agency-listings/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/{}", self.base_url, PROPERTIES_TABLE)
    }

    async fn fetch(
        &self,
        params: Vec<(&'static str, String)>,
    ) -> Result<Vec<PropertyRecord>, StoreError> {
        let url = self.table_url();
        debug!("Fetching {} with {:?}", url, params);

        let response = self.client.get(&url).query(&params).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!("Property store returned status: {}", status);
            return Err(StoreError::Status { status, body });
        }

        let records: Vec<PropertyRecord> = response.json().await?;
        Ok(records)
    }
}

/// Translate a store query into REST filter pairs.
pub fn query_params(query: &StoreQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("select", "*".to_string()),
        ("order", "created_at.desc".to_string()),
    ];
    if let Some(status) = query.status {
        params.push(("status", format!("eq.{status}")));
    }
    if let Some(op) = query.operation_type {
        params.push(("operation_type", format!("eq.{op}")));
    }
    if query.featured_only {
        params.push(("featured", "is.true".to_string()));
    }
    if let Some(limit) = query.limit {
        params.push(("limit", limit.to_string()));
    }
    params
}

#[async_trait]
impl PropertyStore for RestStore {
    async fn list(&self, query: &StoreQuery) -> Result<Vec<PropertyRecord>, StoreError> {
        let records = self.fetch(query_params(query)).await?;
        info!("Fetched {} properties from {}", records.len(), self.base_url);
        Ok(records)
    }

    async fn get(&self, id: &str) -> Result<Option<PropertyRecord>, StoreError> {
        let params = vec![
            ("select", "*".to_string()),
            ("id", format!("eq.{id}")),
            ("limit", "1".to_string()),
        ];
        let records = self.fetch(params).await?;
        Ok(records.into_iter().next())
    }

    fn source_name(&self) -> &'static str {
        "rest"
    }
}
