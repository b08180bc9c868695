//! Domain layer for the MemoBox state service
//!
//! Contains the core types and contracts shared by every other crate:
//! the singleton [`StateRecord`](record::StateRecord), the
//! [`StateStoreProvider`](ports::StateStoreProvider) port that store backends
//! implement, and the closed [`Error`](error::Error) taxonomy. This crate
//! performs no I/O.

/// Domain constants (fixed record key, persisted field names)
pub mod constants;
/// Error taxonomy and result alias
pub mod error;
/// Boundary contracts implemented by external layers
pub mod ports;
/// The singleton persisted entity
pub mod record;
/// Provider configuration value objects
pub mod value_objects;

// Re-export commonly used types for convenience
pub use error::{Error, InputErrorKind, Result};
pub use ports::StateStoreProvider;
pub use record::StateRecord;
pub use value_objects::StoreConfig;
