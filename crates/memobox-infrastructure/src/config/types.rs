//! Configuration types

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};
use memobox_domain::value_objects::StoreConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
        }
    }
}

/// Write-protection configuration
///
/// The source history of this service disagreed with itself on whether
/// saves require a shared password, so the choice is an explicit
/// configuration flag rather than code. Enabling protection without
/// configuring a password is a configuration error surfaced on save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteAuthConfig {
    /// Whether saves require the shared password
    pub enabled: bool,

    /// The shared write password
    ///
    /// Configure via `MEMOBOX__AUTH__WRITE__PASSWORD` or
    /// `auth.write.password` in the config file. Never logged in full.
    #[serde(default)]
    pub password: Option<String>,
}

impl Default for WriteAuthConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            password: None,
        }
    }
}

impl WriteAuthConfig {
    /// Check if the provided password matches the configured secret
    pub fn validate_password(&self, provided: &str) -> bool {
        match &self.password {
            Some(expected) => expected == provided,
            // If no password is configured, reject all attempts
            None => false,
        }
    }

    /// Check if write protection is properly configured
    pub fn is_configured(&self) -> bool {
        self.enabled && self.password.is_some()
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Write-protection settings
    #[serde(default)]
    pub write: WriteAuthConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON-structured log lines
    pub json_format: bool,
    /// Optional log file path (daily rotation)
    #[serde(default)]
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Store backend configuration
    #[serde(default)]
    pub store: StoreConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
