//! Login Loader
//!
//! Reads the serialized login list out of the key-value store.

use crate::store::{KeyValueStore, StoreResult};

use super::record::LoginRecord;

/// Storage key holding the serialized login list.
pub const STORAGE_KEY: &str = "@savepass:logins";

/// Load all logins from the store.
///
/// An absent or empty value is an empty list. A value that is present but not
/// a valid serialized list is an error, propagated to the caller.
pub fn load_logins(store: &dyn KeyValueStore) -> StoreResult<Vec<LoginRecord>> {
    let raw = store.get(STORAGE_KEY)?;
    parse_logins(raw.as_deref())
}

fn parse_logins(raw: Option<&str>) -> StoreResult<Vec<LoginRecord>> {
    match raw {
        None => Ok(Vec::new()),
        Some(value) if value.is_empty() => Ok(Vec::new()),
        Some(value) => Ok(serde_json::from_str(value)?),
    }
}
