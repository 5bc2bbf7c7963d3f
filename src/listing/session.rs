use crate::listing::criteria::{reset_filters, CriteriaChange, FilterCriteria, SortKey};
use crate::listing::engine::{total_pages, ListingEngine, ListingPage};
use crate::models::{OperationType, PropertyRecord, PropertyType};
use tracing::debug;

/// Listing page state for one browsing session.
///
/// Owns the record snapshot fetched from the store and the current
/// criteria. Control handlers edit one field at a time; `view` recomputes
/// the visible page from scratch.
pub struct ListingSession {
    engine: ListingEngine,
    records: Vec<PropertyRecord>,
    criteria: FilterCriteria,
}

impl ListingSession {
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        Self::with_engine(ListingEngine::default(), records)
    }

    pub fn with_engine(engine: ListingEngine, records: Vec<PropertyRecord>) -> Self {
        Self {
            engine,
            records,
            criteria: reset_filters(),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn view(&self) -> ListingPage<'_> {
        self.engine.apply(&self.records, &self.criteria)
    }

    pub fn total_pages(&self) -> usize {
        let count = self.engine.filter_and_sort(&self.records, &self.criteria).len();
        total_pages(count, self.engine.page_size())
    }

    fn change(&mut self, change: CriteriaChange) {
        debug!(?change, "listing criteria changed");
        self.criteria = self.criteria.update(change);
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.change(CriteriaChange::SearchTerm(term.into()));
    }

    pub fn set_operation_type(&mut self, value: Option<OperationType>) {
        self.change(CriteriaChange::OperationType(value));
    }

    pub fn set_property_type(&mut self, value: Option<PropertyType>) {
        self.change(CriteriaChange::PropertyType(value));
    }

    pub fn set_price_range(&mut self, min: Option<f64>, max: Option<f64>) {
        self.change(CriteriaChange::MinPrice(min));
        self.change(CriteriaChange::MaxPrice(max));
    }

    pub fn set_min_bedrooms(&mut self, value: Option<u32>) {
        self.change(CriteriaChange::MinBedrooms(value));
    }

    pub fn set_min_bathrooms(&mut self, value: Option<u32>) {
        self.change(CriteriaChange::MinBathrooms(value));
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.change(CriteriaChange::Sort(key));
    }

    pub fn reset_filters(&mut self) {
        debug!("listing criteria reset");
        self.criteria = reset_filters();
    }

    /// Jump to `page`, clamped into `1..=total_pages`.
    pub fn go_to_page(&mut self, page: usize) {
        let clamped = page.clamp(1, self.total_pages());
        self.change(CriteriaChange::Page(clamped));
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.criteria.page().saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.criteria.page().saturating_sub(1));
    }

    /// Swap in a fresh store snapshot. Filters stay, the page goes back to 1.
    pub fn replace_records(&mut self, records: Vec<PropertyRecord>) {
        debug!(count = records.len(), "listing records replaced");
        self.records = records;
        self.criteria = self.criteria.with_page(1);
    }
}
