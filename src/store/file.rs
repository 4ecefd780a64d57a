//! File Store
//!
//! Key-value store persisted as a single JSON document on disk.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::{KeyValueStore, StoreResult};

/// Store backed by a JSON object file mapping keys to string values.
///
/// The backing file is written by other tools; this store only reads it.
/// A missing file behaves as an empty store.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_document(&self) -> StoreResult<HashMap<String, String>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(HashMap::new());
        }

        Ok(serde_json::from_str(&contents)?)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let document = self.read_document()?;
        Ok(document.get(key).cloned())
    }
}
