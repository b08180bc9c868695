//! Null state store provider for testing
//!
//! A store that accepts every write and always reports absence. Useful
//! for exercising the endpoint without a backend.

use async_trait::async_trait;
use memobox_domain::error::Result;
use memobox_domain::StateStoreProvider;
use serde_json::Value;

/// Null state store that doesn't store anything
#[derive(Debug, Clone, Default)]
pub struct NullStateStore;

impl NullStateStore {
    /// Create a new null state store
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StateStoreProvider for NullStateStore {
    async fn fetch(&self, _key: &str) -> Result<Option<Value>> {
        // Always absent
        Ok(None)
    }

    async fn upsert(&self, _key: &str, _payload: &Value) -> Result<()> {
        // Accept the write but don't store anything
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
