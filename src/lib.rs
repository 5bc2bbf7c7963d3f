//! Property catalog core for a real-estate agency site.
//!
//! The heart of the crate is [`listing`]: a pure filter/sort/paginate engine
//! driven by an immutable [`listing::FilterCriteria`]. Around it sit the
//! property [`store`] backends, lead capture and the lead board in
//! [`leads`], and the back-office [`dashboard`] figures.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod leads;
pub mod listing;
pub mod models;
pub mod store;

pub use error::{ConfigError, LeadError, StoreError};
pub use models::{OperationType, PropertyRecord, PropertyStatus, PropertyType};
