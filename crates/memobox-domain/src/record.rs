//! The singleton state record

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The sole persisted entity
///
/// Exactly one logical `StateRecord` exists for the entire system's
/// lifetime: every read and write targets the fixed key from
/// [`constants::STATE_RECORD_KEY`](crate::constants::STATE_RECORD_KEY).
/// The payload is an arbitrary JSON value, opaque to the store - it is
/// never validated beyond "present and non-null".
///
/// The serialized field names are the persisted column names, kept in
/// sync with [`constants::KEY_FIELD`](crate::constants::KEY_FIELD) and
/// [`constants::PAYLOAD_FIELD`](crate::constants::PAYLOAD_FIELD), so a
/// serialized record is exactly the store row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRecord {
    /// Record selector, the fixed key in practice
    #[serde(rename = "data_key")]
    pub key: String,
    /// The full application payload, replaced wholesale on every save
    #[serde(rename = "app_data")]
    pub payload: Value,
}

impl StateRecord {
    /// Create a record for the given key
    pub fn new(key: impl Into<String>, payload: Value) -> Self {
        Self {
            key: key.into(),
            payload,
        }
    }
}
