//! Logins Module
//!
//! Loading and filtering of stored login entries.

pub mod filter;
pub mod loader;
pub mod record;

// Re-exports
pub use filter::filter_by_service;
pub use loader::{load_logins, STORAGE_KEY};
pub use record::LoginRecord;
