//! Configuration management
//!
//! Configuration is merged from three sources, later sources overriding
//! earlier ones: built-in defaults, an optional TOML file
//! (`memobox.toml`), and `MEMOBOX__`-prefixed environment variables.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, AuthConfig, LoggingConfig, ServerConfig, WriteAuthConfig};
