use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stage of a lead, one column on the board
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    VisitScheduled,
    Negotiating,
    Closed,
    Lost,
}

impl LeadStatus {
    /// Board columns, left to right
    pub const ALL: [LeadStatus; 6] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::VisitScheduled,
        LeadStatus::Negotiating,
        LeadStatus::Closed,
        LeadStatus::Lost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::VisitScheduled => "visit-scheduled",
            LeadStatus::Negotiating => "negotiating",
            LeadStatus::Closed => "closed",
            LeadStatus::Lost => "lost",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contact request captured from the public site
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    #[serde(default)]
    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
}

/// Validated contact form contents, ready to store
#[derive(Debug, Clone, PartialEq)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub property_id: Option<String>,
}
