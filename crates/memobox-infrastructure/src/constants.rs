//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `memobox_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "memobox.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "memobox";

/// Environment variable prefix for configuration
///
/// Nested keys use double underscores, e.g. `MEMOBOX__STORE__SERVICE_KEY`
/// sets `store.service_key`.
pub const CONFIG_ENV_PREFIX: &str = "MEMOBOX__";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default server bind host
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8787;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable consulted for a log filter override
pub const LOG_FILTER_ENV: &str = "MEMOBOX_LOG";
