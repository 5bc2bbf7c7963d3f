use crate::listing::criteria::{FilterCriteria, SortKey};
use crate::models::PropertyRecord;
use serde::Serialize;
use std::cmp::Ordering;

/// Number of cards shown per listing page
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// One page of the filtered, sorted listing set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPage<'a> {
    pub items: Vec<&'a PropertyRecord>,
    pub filtered_count: usize,
    pub total_pages: usize,
    pub page: usize,
}

impl ListingPage<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Filter/sort/paginate engine with a fixed page size
#[derive(Debug, Clone, Copy)]
pub struct ListingEngine {
    page_size: usize,
}

impl Default for ListingEngine {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListingEngine {
    /// A zero page size falls back to one item per page.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Derive the visible page from the full record set.
    ///
    /// Filters run in a fixed order (text, categories, price range,
    /// bedroom/bathroom thresholds), then a stable sort, then slicing.
    /// A page past the end yields no items; the caller clamps.
    pub fn apply<'a>(
        &self,
        records: &'a [PropertyRecord],
        criteria: &FilterCriteria,
    ) -> ListingPage<'a> {
        let sorted = self.filter_and_sort(records, criteria);

        let filtered_count = sorted.len();
        let total_pages = total_pages(filtered_count, self.page_size);
        let page = criteria.page().max(1);

        let start = (page - 1).saturating_mul(self.page_size);
        let items = sorted
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect();

        ListingPage {
            items,
            filtered_count,
            total_pages,
            page,
        }
    }

    /// All matching records in display order, without pagination.
    pub fn filter_and_sort<'a>(
        &self,
        records: &'a [PropertyRecord],
        criteria: &FilterCriteria,
    ) -> Vec<&'a PropertyRecord> {
        let search = criteria.normalized_search();

        let mut matched: Vec<&PropertyRecord> = records
            .iter()
            .filter(|record| matches_text(record, search.as_deref()))
            .filter(|record| {
                criteria
                    .operation_type()
                    .map_or(true, |op| record.operation_type == op)
            })
            .filter(|record| {
                criteria
                    .property_type()
                    .map_or(true, |kind| record.property_type == kind)
            })
            .filter(|record| criteria.min_price().map_or(true, |min| record.price >= min))
            .filter(|record| criteria.max_price().map_or(true, |max| record.price <= max))
            .filter(|record| {
                criteria
                    .min_bedrooms()
                    .map_or(true, |min| record.bedrooms >= min)
            })
            .filter(|record| {
                criteria
                    .min_bathrooms()
                    .map_or(true, |min| record.bathrooms >= min)
            })
            .collect();

        // slice::sort_by is stable, ties keep input order
        matched.sort_by(|a, b| compare(a, b, criteria.sort_key()));
        matched
    }
}

/// Apply `criteria` with the default page size.
pub fn apply<'a>(records: &'a [PropertyRecord], criteria: &FilterCriteria) -> ListingPage<'a> {
    ListingEngine::default().apply(records, criteria)
}

/// Never less than one, so an empty result still renders "page 1 of 1".
pub fn total_pages(filtered_count: usize, page_size: usize) -> usize {
    filtered_count.div_ceil(page_size.max(1)).max(1)
}

fn matches_text(record: &PropertyRecord, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };
    [&record.title, &record.address, &record.neighborhood]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn compare(a: &PropertyRecord, b: &PropertyRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Newest => b.created_at.cmp(&a.created_at),
        SortKey::PriceAsc => a.price.total_cmp(&b.price),
        SortKey::PriceDesc => b.price.total_cmp(&a.price),
        SortKey::Views => b.views.cmp(&a.views),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OperationType, PropertyStatus, PropertyType};
    use chrono::{TimeZone, Utc};

    fn record(id: &str, price: f64, day: u32, views: u64) -> PropertyRecord {
        PropertyRecord {
            id: id.to_string(),
            title: format!("Casa {id}"),
            address: format!("Calle {id}"),
            neighborhood: "Norte".to_string(),
            city: None,
            price,
            operation_type: OperationType::Sale,
            property_type: PropertyType::House,
            bedrooms: 2,
            bathrooms: 1,
            area: 80.0,
            status: PropertyStatus::Available,
            featured: false,
            views,
            created_at: Utc.with_ymd_and_hms(2024, 1, day, 9, 0, 0).unwrap(),
            description: String::new(),
            images: vec![],
        }
    }

    fn ids<'a>(items: &[&'a PropertyRecord]) -> Vec<&'a str> {
        items.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, 12), 1);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(25, 12), 3);
    }

    #[test]
    fn ties_keep_input_order() {
        let records = vec![
            record("a", 100.0, 1, 5),
            record("b", 100.0, 2, 5),
            record("c", 50.0, 3, 5),
        ];
        let criteria = FilterCriteria::default().with_sort(SortKey::PriceAsc);
        let page = apply(&records, &criteria);
        assert_eq!(ids(&page.items), vec!["c", "a", "b"]);

        let criteria = criteria.with_sort(SortKey::Views);
        let page = apply(&records, &criteria);
        assert_eq!(ids(&page.items), vec!["a", "b", "c"]);
    }

    #[test]
    fn newest_sorts_by_creation_descending() {
        let records = vec![
            record("old", 1.0, 1, 0),
            record("new", 1.0, 20, 0),
            record("mid", 1.0, 10, 0),
        ];
        let page = apply(&records, &FilterCriteria::default());
        assert_eq!(ids(&page.items), vec!["new", "mid", "old"]);
    }

    #[test]
    fn paginates_by_page_size() {
        let records: Vec<_> = (1..=5)
            .map(|i| record(&i.to_string(), i as f64, i, 0))
            .collect();
        let engine = ListingEngine::with_page_size(2);
        let criteria = FilterCriteria::default().with_sort(SortKey::PriceAsc);

        let first = engine.apply(&records, &criteria);
        assert_eq!(ids(&first.items), vec!["1", "2"]);
        assert_eq!(first.total_pages, 3);

        let last = engine.apply(&records, &criteria.with_page(3));
        assert_eq!(ids(&last.items), vec!["5"]);

        let past_end = engine.apply(&records, &criteria.with_page(4));
        assert!(past_end.is_empty());
        assert_eq!(past_end.filtered_count, 5);
    }

    #[test]
    fn page_zero_reads_as_first_page() {
        let records = vec![record("a", 1.0, 1, 0)];
        let page = apply(&records, &FilterCriteria::default().with_page(0));
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn negative_bounds_are_accepted() {
        let records = vec![record("a", 10.0, 1, 0)];
        let criteria = FilterCriteria::default()
            .with_min_price(Some(-100.0))
            .with_max_price(Some(-1.0));
        let page = apply(&records, &criteria);
        assert_eq!(page.filtered_count, 0);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn thresholds_are_inclusive() {
        let mut studio = record("studio", 1.0, 1, 0);
        studio.bedrooms = 0;
        let records = vec![studio, record("two", 1.0, 2, 0)];

        let page = apply(&records, &FilterCriteria::default().with_min_bedrooms(Some(2)));
        assert_eq!(ids(&page.items), vec!["two"]);

        let page = apply(&records, &FilterCriteria::default().with_min_bathrooms(Some(1)));
        assert_eq!(page.filtered_count, 2);
    }
}
