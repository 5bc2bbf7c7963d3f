use crate::error::LeadError;
use crate::leads::model::{Lead, LeadStatus, NewLead};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

/// Server side of the lead pipeline
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// All leads, newest first
    async fn list(&self) -> Result<Vec<Lead>, LeadError>;

    async fn create(&self, lead: NewLead) -> Result<Lead, LeadError>;

    /// Persist a status change and return the stored lead
    async fn update_status(&self, id: &str, status: LeadStatus) -> Result<Lead, LeadError>;
}

#[derive(Default)]
pub struct InMemoryLeadStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    leads: Vec<Lead>,
    next_id: u64,
}

impl InMemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LeadStore for InMemoryLeadStore {
    async fn list(&self) -> Result<Vec<Lead>, LeadError> {
        let inner = self.inner.read().await;
        let mut leads = inner.leads.clone();
        leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(leads)
    }

    async fn create(&self, lead: NewLead) -> Result<Lead, LeadError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let lead = Lead {
            id: format!("lead-{}", inner.next_id),
            name: lead.name,
            email: lead.email,
            phone: lead.phone,
            message: lead.message,
            property_id: lead.property_id,
            status: LeadStatus::New,
            created_at: Utc::now(),
        };
        info!("📨 New lead {} from {}", lead.id, lead.email);
        inner.leads.push(lead.clone());
        Ok(lead)
    }

    async fn update_status(&self, id: &str, status: LeadStatus) -> Result<Lead, LeadError> {
        let mut inner = self.inner.write().await;
        let lead = inner
            .leads
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| LeadError::UnknownLead(id.to_string()))?;
        lead.status = status;
        Ok(lead.clone())
    }
}
