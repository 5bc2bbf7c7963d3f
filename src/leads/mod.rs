pub mod board;
pub mod form;
pub mod model;
pub mod store;

pub use board::{LeadBoard, PendingMove};
pub use form::LeadForm;
pub use model::{Lead, LeadStatus, NewLead};
pub use store::{InMemoryLeadStore, LeadStore};
