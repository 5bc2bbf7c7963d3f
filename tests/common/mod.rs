#![allow(dead_code)]

use agency_listings::models::{OperationType, PropertyRecord, PropertyStatus, PropertyType};
use chrono::{Duration, TimeZone, Utc};

/// Build a record whose `created_at` grows with `day`.
pub fn property(
    id: &str,
    title: &str,
    neighborhood: &str,
    price: f64,
    operation_type: OperationType,
    property_type: PropertyType,
    day: i64,
) -> PropertyRecord {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
    PropertyRecord {
        id: id.to_string(),
        title: title.to_string(),
        address: format!("Calle {id} 100"),
        neighborhood: neighborhood.to_string(),
        city: Some("Córdoba".to_string()),
        price,
        operation_type,
        property_type,
        bedrooms: 2,
        bathrooms: 1,
        area: 90.0,
        status: PropertyStatus::Available,
        featured: false,
        views: 0,
        created_at: base + Duration::days(day),
        description: String::new(),
        images: vec![],
    }
}

/// Six listings: four for sale, two for rent, two in "Centro".
pub fn six_properties() -> Vec<PropertyRecord> {
    use OperationType::*;
    use PropertyType::*;

    let mut records = vec![
        property("p1", "Lote en Las Quintas", "Las Quintas", 25_000.0, Sale, Land, 1),
        property("p2", "Departamento luminoso", "Centro", 35_000.0, Rent, Apartment, 2),
        property("p3", "Casa con jardín", "Barrio Norte", 45_000.0, Sale, House, 3),
        property("p4", "Local comercial", "Centro", 85_000.0, Rent, Commercial, 4),
        property("p5", "Casa familiar", "Villa Sur", 95_000.0, Sale, House, 5),
        property("p6", "Chalet con pileta", "Los Álamos", 120_000.0, Sale, House, 6),
    ];

    let views = [40, 120, 75, 10, 200, 55];
    let bedrooms = [0, 1, 3, 0, 4, 5];
    let bathrooms = [0, 1, 2, 1, 2, 3];
    for (i, record) in records.iter_mut().enumerate() {
        record.views = views[i];
        record.bedrooms = bedrooms[i];
        record.bathrooms = bathrooms[i];
    }
    records[4].featured = true;
    records[5].featured = true;
    records
}

/// `n` houses and apartments alternating, prices rising with the index.
pub fn many_properties(n: usize) -> Vec<PropertyRecord> {
    (0..n)
        .map(|i| {
            let kind = if i % 2 == 0 {
                PropertyType::House
            } else {
                PropertyType::Apartment
            };
            property(
                &format!("m{i}"),
                &format!("Propiedad {i}"),
                "Barrio Jardín",
                10_000.0 + 1_000.0 * i as f64,
                OperationType::Sale,
                kind,
                i as i64,
            )
        })
        .collect()
}

pub fn ids(items: &[&PropertyRecord]) -> Vec<String> {
    items.iter().map(|r| r.id.clone()).collect()
}
