//! State Store Port
//!
//! Defines the contract for keyed JSON state persistence. Implementations
//! live in `memobox-providers`: Supabase REST for production, in-memory
//! for development and tests, null for testing without a backend.

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// State store interface for singleton JSON persistence
///
/// Upsert semantics are part of the contract: `upsert` is a single atomic
/// replace at the store, so concurrent writers against the same key get
/// last-writer-wins with no read-modify-write window. Implementations must
/// not add client-side compare-and-swap or merging.
#[async_trait]
pub trait StateStoreProvider: Send + Sync + std::fmt::Debug {
    /// Fetch the payload stored under `key`
    ///
    /// Returns `Ok(None)` when no record exists. A store that cannot be
    /// reached or queried is an error, never silently reported as absent.
    async fn fetch(&self, key: &str) -> Result<Option<Value>>;

    /// Insert the payload under `key`, or replace it wholesale if present
    async fn upsert(&self, key: &str, payload: &Value) -> Result<()>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
