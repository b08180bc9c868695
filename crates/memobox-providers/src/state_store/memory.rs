//! In-memory state store provider
//!
//! Process-local backend for development and testing. Data is not
//! persisted and is lost on restart.

use async_trait::async_trait;
use dashmap::DashMap;
use memobox_domain::error::Result;
use memobox_domain::StateStoreProvider;
use serde_json::Value;
use std::sync::Arc;

/// In-memory state store
///
/// Stores payloads in a concurrent hash map. A `DashMap` insert replaces
/// the previous value atomically, matching the store contract's
/// last-writer-wins upsert semantics.
#[derive(Debug, Clone)]
pub struct InMemoryStateStore {
    records: Arc<DashMap<String, Value>>,
}

impl InMemoryStateStore {
    /// Create an empty in-memory state store
    pub fn new() -> Self {
        Self {
            records: Arc::new(DashMap::new()),
        }
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for InMemoryStateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StateStoreProvider for InMemoryStateStore {
    async fn fetch(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.records.get(key).map(|entry| entry.value().clone()))
    }

    async fn upsert(&self, key: &str, payload: &Value) -> Result<()> {
        self.records.insert(key.to_string(), payload.clone());
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memobox_domain::constants::STATE_RECORD_KEY;
    use serde_json::json;

    #[tokio::test]
    async fn fetch_before_first_upsert_is_absent() {
        let store = InMemoryStateStore::new();
        assert_eq!(store.fetch(STATE_RECORD_KEY).await.unwrap(), None);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn upsert_then_fetch_round_trips() {
        let store = InMemoryStateStore::new();
        let payload = json!({"students": ["ada", "grace"], "count": 2});

        store.upsert(STATE_RECORD_KEY, &payload).await.unwrap();
        assert_eq!(store.fetch(STATE_RECORD_KEY).await.unwrap(), Some(payload));
    }

    #[tokio::test]
    async fn upsert_replaces_wholesale() {
        let store = InMemoryStateStore::new();

        store
            .upsert(STATE_RECORD_KEY, &json!({"count": 1, "extra": true}))
            .await
            .unwrap();
        store
            .upsert(STATE_RECORD_KEY, &json!({"count": 2}))
            .await
            .unwrap();

        // Full replace: no merging of the first payload's fields
        assert_eq!(
            store.fetch(STATE_RECORD_KEY).await.unwrap(),
            Some(json!({"count": 2}))
        );
        assert_eq!(store.len(), 1);
    }
}
