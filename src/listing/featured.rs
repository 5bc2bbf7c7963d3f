use crate::models::{PropertyRecord, PropertyStatus};

/// Number of cards in the home page "featured" strip
pub const HOME_FEATURED_LIMIT: usize = 6;

/// Featured, still-available listings, newest first.
pub fn featured(records: &[PropertyRecord], limit: usize) -> Vec<&PropertyRecord> {
    let mut picked: Vec<&PropertyRecord> = records
        .iter()
        .filter(|r| r.featured && r.status == PropertyStatus::Available)
        .collect();
    picked.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    picked.truncate(limit);
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OperationType, PropertyType};
    use chrono::{TimeZone, Utc};

    fn record(id: &str, featured: bool, status: PropertyStatus, day: u32) -> PropertyRecord {
        PropertyRecord {
            id: id.to_string(),
            title: id.to_string(),
            address: String::new(),
            neighborhood: String::new(),
            city: None,
            price: 1.0,
            operation_type: OperationType::Rent,
            property_type: PropertyType::Apartment,
            bedrooms: 1,
            bathrooms: 1,
            area: 40.0,
            status,
            featured,
            views: 0,
            created_at: Utc.with_ymd_and_hms(2024, 2, day, 0, 0, 0).unwrap(),
            description: String::new(),
            images: vec![],
        }
    }

    #[test]
    fn skips_sold_and_unfeatured() {
        let records = vec![
            record("plain", false, PropertyStatus::Available, 1),
            record("sold", true, PropertyStatus::Sold, 2),
            record("older", true, PropertyStatus::Available, 3),
            record("newer", true, PropertyStatus::Available, 4),
        ];
        let ids: Vec<_> = featured(&records, HOME_FEATURED_LIMIT)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["newer", "older"]);
        assert_eq!(featured(&records, 1).len(), 1);
    }
}
