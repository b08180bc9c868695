//! Infrastructure layer for the MemoBox state service
//!
//! Configuration loading (defaults, TOML file, environment variables),
//! structured logging initialization, and error context utilities. Nothing
//! here touches the store; provider construction lives in
//! `memobox-providers` and is wired up by `memobox-server`.

/// Configuration types and loader
pub mod config;
/// Infrastructure constants
pub mod constants;
/// Error context extension trait
pub mod error_ext;
/// Structured logging with tracing
pub mod logging;

pub use config::{AppConfig, AuthConfig, ConfigLoader, LoggingConfig, ServerConfig, WriteAuthConfig};
pub use logging::init_logging;
