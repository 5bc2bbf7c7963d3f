use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a listing is offered for sale or for rent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Sale,
    Rent,
}

/// Kind of building or plot being listed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Apartment,
    Commercial,
    Land,
}

/// Listing availability
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    #[default]
    Available,
    Sold,
    Rented,
}

/// Core property data model
///
/// Serialized in camelCase; snake_case column names from the hosted
/// database are accepted as aliases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: String,
    pub title: String,
    pub address: String,
    pub neighborhood: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub price: f64,
    #[serde(alias = "operation_type")]
    pub operation_type: OperationType,
    #[serde(alias = "property_type")]
    pub property_type: PropertyType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bedrooms: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bathrooms: u32,
    pub area: f64,
    #[serde(default)]
    pub status: PropertyStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub views: u64,
    #[serde(alias = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

/// Treats an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Error returned when a textual enum value is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! text_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok($ty::$variant),)+
                    _ => Err(ParseEnumError {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

text_enum!(OperationType, "operation type", {
    Sale => "sale",
    Rent => "rent",
});

text_enum!(PropertyType, "property type", {
    House => "house",
    Apartment => "apartment",
    Commercial => "commercial",
    Land => "land",
});

text_enum!(PropertyStatus, "property status", {
    Available => "available",
    Sold => "sold",
    Rented => "rented",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deserializes_from_camel_case_with_missing_counts() {
        let json = r#"{
            "id": "p1",
            "title": "Lote en las afueras",
            "address": "Ruta 5 km 12",
            "neighborhood": "Las Quintas",
            "price": 25000,
            "operationType": "sale",
            "propertyType": "land",
            "area": 600,
            "createdAt": "2024-03-01T12:00:00Z"
        }"#;

        let record: PropertyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.bedrooms, 0);
        assert_eq!(record.bathrooms, 0);
        assert_eq!(record.status, PropertyStatus::Available);
        assert!(!record.featured);
        assert_eq!(record.property_type, PropertyType::Land);
    }

    #[test]
    fn record_accepts_snake_case_columns_and_nulls() {
        let json = r#"{
            "id": "p2",
            "title": "Departamento",
            "address": "San Martin 200",
            "neighborhood": "Centro",
            "price": 35000,
            "operation_type": "rent",
            "property_type": "apartment",
            "bedrooms": null,
            "bathrooms": 1,
            "area": 45.5,
            "status": "rented",
            "views": null,
            "created_at": "2024-03-02T08:30:00Z"
        }"#;

        let record: PropertyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.operation_type, OperationType::Rent);
        assert_eq!(record.bedrooms, 0);
        assert_eq!(record.views, 0);
        assert_eq!(record.status, PropertyStatus::Rented);
    }

    #[test]
    fn enums_parse_case_insensitively() {
        assert_eq!("SALE".parse::<OperationType>().unwrap(), OperationType::Sale);
        assert_eq!(" Apartment ".parse::<PropertyType>().unwrap(), PropertyType::Apartment);
        assert!("castle".parse::<PropertyType>().is_err());
    }
}
