//! Back-office summary figures over listings and leads.

use crate::leads::{Lead, LeadStatus};
use crate::models::{OperationType, PropertyRecord, PropertyStatus};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_properties: usize,
    pub available: usize,
    pub sold: usize,
    pub rented: usize,
    pub featured: usize,
    pub total_views: u64,
    /// Mean price of available sale listings, `None` when there are none
    pub average_sale_price: Option<f64>,
    pub most_viewed: Option<String>,
    pub total_leads: usize,
    pub leads_by_status: Vec<(LeadStatus, usize)>,
}

impl DashboardStats {
    pub fn collect(properties: &[PropertyRecord], leads: &[Lead]) -> Self {
        let count = |status: PropertyStatus| {
            properties.iter().filter(|p| p.status == status).count()
        };

        let sale_prices: Vec<f64> = properties
            .iter()
            .filter(|p| {
                p.status == PropertyStatus::Available && p.operation_type == OperationType::Sale
            })
            .map(|p| p.price)
            .collect();
        let average_sale_price = if sale_prices.is_empty() {
            None
        } else {
            Some(sale_prices.iter().sum::<f64>() / sale_prices.len() as f64)
        };

        // max_by_key keeps the last maximum; reverse so the first listed wins ties
        let most_viewed = properties
            .iter()
            .rev()
            .max_by_key(|p| p.views)
            .map(|p| p.id.clone());

        let leads_by_status = LeadStatus::ALL
            .iter()
            .map(|&status| (status, leads.iter().filter(|l| l.status == status).count()))
            .collect();

        Self {
            total_properties: properties.len(),
            available: count(PropertyStatus::Available),
            sold: count(PropertyStatus::Sold),
            rented: count(PropertyStatus::Rented),
            featured: properties.iter().filter(|p| p.featured).count(),
            total_views: properties.iter().map(|p| p.views).sum(),
            average_sale_price,
            most_viewed,
            total_leads: leads.len(),
            leads_by_status,
        }
    }

    pub fn leads_in(&self, status: LeadStatus) -> usize {
        self.leads_by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map_or(0, |(_, n)| *n)
    }
}
