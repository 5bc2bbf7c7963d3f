use crate::models::{OperationType, ParseEnumError, PropertyType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordering applied to the filtered listing set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Most recently created first
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    /// Most viewed first
    Views,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Views => "views",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(SortKey::Newest),
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            "views" => Ok(SortKey::Views),
            _ => Err(ParseEnumError {
                kind: "sort key",
                value: s.to_string(),
            }),
        }
    }
}

/// Parse a select-box value where "all" means no filter.
pub fn parse_choice<T>(value: &str) -> Result<Option<T>, T::Err>
where
    T: FromStr,
{
    if value.trim().eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    value.parse().map(Some)
}

/// A single edit to one field of [`FilterCriteria`].
#[derive(Debug, Clone, PartialEq)]
pub enum CriteriaChange {
    SearchTerm(String),
    OperationType(Option<OperationType>),
    PropertyType(Option<PropertyType>),
    MinPrice(Option<f64>),
    MaxPrice(Option<f64>),
    MinBedrooms(Option<u32>),
    MinBathrooms(Option<u32>),
    Sort(SortKey),
    Page(usize),
}

/// Search, filter, sort and page selection for the listing view.
///
/// Values are immutable; every edit goes through [`FilterCriteria::update`],
/// which puts the page back to 1 for any change other than
/// [`CriteriaChange::Page`]. A narrowed result set therefore never lands on
/// a stale page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    search_term: String,
    operation_type: Option<OperationType>,
    property_type: Option<PropertyType>,
    min_price: Option<f64>,
    max_price: Option<f64>,
    min_bedrooms: Option<u32>,
    min_bathrooms: Option<u32>,
    sort_key: SortKey,
    page: usize,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            operation_type: None,
            property_type: None,
            min_price: None,
            max_price: None,
            min_bedrooms: None,
            min_bathrooms: None,
            sort_key: SortKey::Newest,
            page: 1,
        }
    }
}

/// Default criteria: no filters, newest first, first page.
pub fn reset_filters() -> FilterCriteria {
    FilterCriteria::default()
}

impl FilterCriteria {
    pub fn update(&self, change: CriteriaChange) -> FilterCriteria {
        let mut next = self.clone();
        match change {
            CriteriaChange::Page(page) => {
                next.page = page;
                return next;
            }
            CriteriaChange::SearchTerm(term) => next.search_term = term,
            CriteriaChange::OperationType(value) => next.operation_type = value,
            CriteriaChange::PropertyType(value) => next.property_type = value,
            CriteriaChange::MinPrice(value) => next.min_price = value,
            CriteriaChange::MaxPrice(value) => next.max_price = value,
            CriteriaChange::MinBedrooms(value) => next.min_bedrooms = value,
            CriteriaChange::MinBathrooms(value) => next.min_bathrooms = value,
            CriteriaChange::Sort(key) => next.sort_key = key,
        }
        next.page = 1;
        next
    }

    pub fn with_search_term(&self, term: impl Into<String>) -> Self {
        self.update(CriteriaChange::SearchTerm(term.into()))
    }

    pub fn with_operation_type(&self, value: Option<OperationType>) -> Self {
        self.update(CriteriaChange::OperationType(value))
    }

    pub fn with_property_type(&self, value: Option<PropertyType>) -> Self {
        self.update(CriteriaChange::PropertyType(value))
    }

    pub fn with_min_price(&self, value: Option<f64>) -> Self {
        self.update(CriteriaChange::MinPrice(value))
    }

    pub fn with_max_price(&self, value: Option<f64>) -> Self {
        self.update(CriteriaChange::MaxPrice(value))
    }

    pub fn with_min_bedrooms(&self, value: Option<u32>) -> Self {
        self.update(CriteriaChange::MinBedrooms(value))
    }

    pub fn with_min_bathrooms(&self, value: Option<u32>) -> Self {
        self.update(CriteriaChange::MinBathrooms(value))
    }

    pub fn with_sort(&self, key: SortKey) -> Self {
        self.update(CriteriaChange::Sort(key))
    }

    pub fn with_page(&self, page: usize) -> Self {
        self.update(CriteriaChange::Page(page))
    }

    /// The raw search text as typed.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Lowercased, trimmed search text, or `None` when blank.
    pub fn normalized_search(&self) -> Option<String> {
        let trimmed = self.search_term.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    pub fn operation_type(&self) -> Option<OperationType> {
        self.operation_type
    }

    pub fn property_type(&self) -> Option<PropertyType> {
        self.property_type
    }

    pub fn min_price(&self) -> Option<f64> {
        self.min_price
    }

    pub fn max_price(&self) -> Option<f64> {
        self.max_price
    }

    pub fn min_bedrooms(&self) -> Option<u32> {
        self.min_bedrooms
    }

    pub fn min_bathrooms(&self) -> Option<u32> {
        self.min_bathrooms
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// True when no filter narrows the record set.
    pub fn is_unfiltered(&self) -> bool {
        self.normalized_search().is_none()
            && self.operation_type.is_none()
            && self.property_type.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_bedrooms.is_none()
            && self.min_bathrooms.is_none()
    }
}
