//! Provider implementations for the MemoBox state service
//!
//! Concrete backends for the [`StateStoreProvider`] port defined in
//! `memobox-domain`:
//!
//! - **Supabase REST** - production backend speaking PostgREST over HTTP
//! - **In-memory** - process-local backend for development and tests
//! - **Null** - accepts writes, reports absence; for endpoint tests
//!
//! Backends are selected by name through [`state_store::create_state_store`].

/// State store provider implementations and factory
pub mod state_store;

pub use memobox_domain::StateStoreProvider;
#[cfg(feature = "store-memory")]
pub use state_store::InMemoryStateStore;
#[cfg(feature = "store-null")]
pub use state_store::NullStateStore;
#[cfg(feature = "store-supabase")]
pub use state_store::SupabaseStateStore;
pub use state_store::create_state_store;
