pub mod criteria;
pub mod engine;
pub mod featured;
pub mod session;

pub use criteria::{parse_choice, reset_filters, CriteriaChange, FilterCriteria, SortKey};
pub use engine::{apply, ListingEngine, ListingPage, DEFAULT_PAGE_SIZE};
pub use featured::{featured, HOME_FEATURED_LIMIT};
pub use session::ListingSession;
