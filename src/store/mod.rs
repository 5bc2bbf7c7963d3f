pub mod json_file;
pub mod memory;
pub mod rest;
pub mod traits;
pub mod types;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
pub use rest::RestStore;
pub use traits::PropertyStore;
pub use types::StoreQuery;
