//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and external layers. Ports
//! define what providers must implement; the dependency points inward:
//! high-level modules (domain) define interfaces, low-level modules
//! (providers, infrastructure) implement them.

/// State store persistence port
pub mod state_store;

// Re-export commonly used port traits for convenience
pub use state_store::StateStoreProvider;
