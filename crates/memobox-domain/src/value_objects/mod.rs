//! Domain value objects
//!
//! Plain configuration values consumed by provider factories. Loading and
//! layering of these values (files, environment) happens in
//! `memobox-infrastructure`; the domain only defines their shape.

use serde::{Deserialize, Serialize};

/// Store backend configuration
///
/// Selects and parameterizes the state store provider. `url` and
/// `service_key` are required by the Supabase backend and ignored by the
/// in-memory and null backends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Provider name ("supabase", "memory", "null")
    pub provider: String,
    /// Store endpoint URL (Supabase project URL)
    pub url: Option<String>,
    /// Store access credential (Supabase service role key)
    pub service_key: Option<String>,
    /// Table holding the singleton record
    pub table: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: "memory".to_string(),
            url: None,
            service_key: None,
            table: "memobox_storage".to_string(),
        }
    }
}
