//! State store provider implementations
//!
//! Each backend implements the `StateStoreProvider` port from
//! `memobox-domain`. The factory selects a backend by the provider name in
//! [`StoreConfig`]; an unknown or compiled-out name is a configuration
//! error, not a fallback.

#[cfg(feature = "store-memory")]
mod memory;
#[cfg(feature = "store-null")]
mod null;
#[cfg(feature = "store-supabase")]
mod supabase;

#[cfg(feature = "store-memory")]
pub use memory::InMemoryStateStore;
#[cfg(feature = "store-null")]
pub use null::NullStateStore;
#[cfg(feature = "store-supabase")]
pub use supabase::SupabaseStateStore;

use memobox_domain::error::{Error, Result};
use memobox_domain::value_objects::StoreConfig;
use memobox_domain::StateStoreProvider;
use std::sync::Arc;

/// Create a state store provider from configuration
///
/// Fails with `Error::Config` when the provider name is unknown or the
/// selected backend's required settings are missing.
pub fn create_state_store(config: &StoreConfig) -> Result<Arc<dyn StateStoreProvider>> {
    match config.provider.as_str() {
        #[cfg(feature = "store-supabase")]
        "supabase" => {
            let url = config
                .url
                .as_deref()
                .ok_or_else(|| Error::config("Supabase store requires store.url"))?;
            let service_key = config
                .service_key
                .as_deref()
                .ok_or_else(|| Error::config("Supabase store requires store.service_key"))?;
            Ok(Arc::new(SupabaseStateStore::new(
                url,
                service_key,
                &config.table,
            )?))
        }
        #[cfg(feature = "store-memory")]
        "memory" => Ok(Arc::new(InMemoryStateStore::new())),
        #[cfg(feature = "store-null")]
        "null" => Ok(Arc::new(NullStateStore::new())),
        other => Err(Error::config(format!(
            "Unknown state store provider: '{other}'"
        ))),
    }
}
