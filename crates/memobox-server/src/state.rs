//! Shared endpoint state
//!
//! The endpoint holds two pieces of process-wide state: the store
//! availability gate and the write-protection settings. Both are
//! constructed once at startup and injected; handlers hold no mutable
//! shared state of their own.

use memobox_domain::error::{Error, Result};
use memobox_domain::StateStoreProvider;
use memobox_infrastructure::config::WriteAuthConfig;
use std::sync::Arc;

/// Store availability gate
///
/// "Client unavailable" is an explicit constructor-time value, not a
/// nullable global checked ad hoc. With an unavailable gate every
/// load/save fails fast with a configuration error instead of reaching
/// the store and failing later with a confusing store-level error.
#[derive(Clone)]
pub enum StoreGate {
    /// Store client was built successfully
    Ready(Arc<dyn StateStoreProvider>),
    /// Store client could not be built; holds the reason
    Unavailable(String),
}

impl StoreGate {
    /// Gate around a working store client
    pub fn ready(store: Arc<dyn StateStoreProvider>) -> Self {
        Self::Ready(store)
    }

    /// Gate recording a startup construction failure
    pub fn unavailable<S: Into<String>>(reason: S) -> Self {
        Self::Unavailable(reason.into())
    }

    /// The store client, or the recorded configuration error
    pub fn store(&self) -> Result<&Arc<dyn StateStoreProvider>> {
        match self {
            Self::Ready(store) => Ok(store),
            Self::Unavailable(reason) => Err(Error::config(reason.clone())),
        }
    }

    /// Provider name for diagnostics, if the store is available
    pub fn provider_name(&self) -> Option<&str> {
        match self {
            Self::Ready(store) => Some(store.provider_name()),
            Self::Unavailable(_) => None,
        }
    }
}

/// Shared state managed by the Rocket instance
#[derive(Clone)]
pub struct EndpointState {
    /// Store availability gate
    pub gate: StoreGate,
    /// Write-protection settings for saves
    pub write_auth: WriteAuthConfig,
}

impl EndpointState {
    /// Create the endpoint state
    pub fn new(gate: StoreGate, write_auth: WriteAuthConfig) -> Self {
        Self { gate, write_auth }
    }
}
