use crate::models::{OperationType, PropertyRecord, PropertyStatus};
use serde::{Deserialize, Serialize};

/// Server-side pre-filter passed to a property store
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoreQuery {
    /// Only listings with this status
    pub status: Option<PropertyStatus>,
    /// Only sale or only rent listings
    pub operation_type: Option<OperationType>,
    /// Only listings flagged as featured
    pub featured_only: bool,
    /// Maximum number of records returned
    pub limit: Option<usize>,
}

impl StoreQuery {
    /// Everything the store holds.
    pub fn all() -> Self {
        Self::default()
    }

    /// What the public catalog shows.
    pub fn public() -> Self {
        Self {
            status: Some(PropertyStatus::Available),
            ..Self::default()
        }
    }

    pub fn matches(&self, record: &PropertyRecord) -> bool {
        self.status.map_or(true, |s| record.status == s)
            && self.operation_type.map_or(true, |op| record.operation_type == op)
            && (!self.featured_only || record.featured)
    }

    /// Narrow an in-memory snapshot the way a remote store would:
    /// newest first, then cut to `limit`.
    pub fn select(&self, records: &[PropertyRecord]) -> Vec<PropertyRecord> {
        let mut matched: Vec<&PropertyRecord> =
            records.iter().filter(|r| self.matches(r)).collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let Some(limit) = self.limit {
            matched.truncate(limit);
        }
        matched.into_iter().cloned().collect()
    }
}
