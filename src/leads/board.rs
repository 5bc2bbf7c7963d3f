use crate::error::LeadError;
use crate::leads::model::{Lead, LeadStatus};
use crate::leads::store::LeadStore;
use tracing::{debug, warn};

/// A status change applied locally and not yet confirmed by the store
#[derive(Debug, Clone, PartialEq)]
pub struct PendingMove {
    pub lead_id: String,
    pub from: LeadStatus,
    pub to: LeadStatus,
}

/// Kanban view of leads grouped by status.
///
/// Moves are optimistic: the card changes column immediately, then the
/// store is asked to persist it. If the store refuses, the whole board goes
/// back to the last snapshot the store confirmed.
#[derive(Debug, Default)]
pub struct LeadBoard {
    leads: Vec<Lead>,
    confirmed: Vec<Lead>,
}

impl LeadBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(leads: Vec<Lead>) -> Self {
        Self {
            confirmed: leads.clone(),
            leads,
        }
    }

    /// Replace local state with the store's current view.
    pub async fn refresh(&mut self, store: &dyn LeadStore) -> Result<(), LeadError> {
        let leads = store.list().await?;
        debug!("Lead board refreshed with {} leads", leads.len());
        *self = Self::from_snapshot(leads);
        Ok(())
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn lead(&self, id: &str) -> Option<&Lead> {
        self.leads.iter().find(|l| l.id == id)
    }

    pub fn column(&self, status: LeadStatus) -> Vec<&Lead> {
        self.leads.iter().filter(|l| l.status == status).collect()
    }

    pub fn columns(&self) -> Vec<(LeadStatus, Vec<&Lead>)> {
        LeadStatus::ALL
            .iter()
            .map(|&status| (status, self.column(status)))
            .collect()
    }

    /// Move the card locally. `None` when it already sits in `to`.
    pub fn apply_local(
        &mut self,
        id: &str,
        to: LeadStatus,
    ) -> Result<Option<PendingMove>, LeadError> {
        let lead = self
            .leads
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| LeadError::UnknownLead(id.to_string()))?;

        if lead.status == to {
            return Ok(None);
        }

        let pending = PendingMove {
            lead_id: id.to_string(),
            from: lead.status,
            to,
        };
        lead.status = to;
        Ok(Some(pending))
    }

    /// Record the store's answer to a pending move.
    pub fn settle(
        &mut self,
        pending: &PendingMove,
        outcome: Result<Lead, LeadError>,
    ) -> Result<(), LeadError> {
        match outcome {
            Ok(stored) => {
                if let Some(local) = self.leads.iter_mut().find(|l| l.id == stored.id) {
                    *local = stored.clone();
                }
                match self.confirmed.iter_mut().find(|l| l.id == stored.id) {
                    Some(confirmed) => *confirmed = stored,
                    None => self.confirmed.push(stored),
                }
                Ok(())
            }
            Err(err) => {
                warn!(
                    "Moving lead {} from {} to {} failed, reverting board: {}",
                    pending.lead_id, pending.from, pending.to, err
                );
                self.leads = self.confirmed.clone();
                Err(err)
            }
        }
    }

    /// Optimistically move a lead and sync the change with the store.
    pub async fn move_lead(
        &mut self,
        store: &dyn LeadStore,
        id: &str,
        to: LeadStatus,
    ) -> Result<(), LeadError> {
        let Some(pending) = self.apply_local(id, to)? else {
            return Ok(());
        };
        let outcome = store.update_status(id, to).await;
        self.settle(&pending, outcome)
    }
}
