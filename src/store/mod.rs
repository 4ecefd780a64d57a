//! Storage Module
//!
//! Key-value persistence behind an injectable trait.

pub mod file;
pub mod memory;

use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed store data: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read access to a string key-value store.
///
/// `get` returns `Ok(None)` for an absent key; read failures and an
/// undecodable backing document are errors.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
}

// Re-exports
pub use file::FileStore;
pub use memory::MemoryStore;
