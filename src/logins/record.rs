//! Login Records
//!
//! Data structure for stored login entries.

use serde::{Deserialize, Serialize};

/// One stored login entry.
///
/// Records are loaded as-is from the store and never mutated or written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRecord {
    pub id: String,
    pub service_name: String,
    pub email: String,
    pub password: String,
}

impl LoginRecord {
    pub fn new(
        id: impl Into<String>,
        service_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            service_name: service_name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}
