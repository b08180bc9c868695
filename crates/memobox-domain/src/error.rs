//! Error handling types
//!
//! A closed set of error variants so callers and tests can discriminate
//! outcomes structurally rather than by inspecting message strings.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Sub-kinds of client input errors
///
/// Each kind is a distinct failure mode a caller must be able to tell
/// apart. The two credential kinds are deliberately not collapsed so a
/// client can distinguish "forgot password" from "wrong password".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputErrorKind {
    /// Request carried no body at all
    MissingBody,
    /// Body was present but is not well-formed JSON
    MalformedJson,
    /// `data` field absent or null
    MissingPayload,
    /// Write protection is enabled and no credential was supplied
    CredentialRequired,
    /// A credential was supplied but does not match the configured secret
    CredentialRejected,
}

/// Main error type for the MemoBox state service
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related error (store client could not be built,
    /// auth enabled without a credential configured)
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Client input error, rejected before any store call
    #[error("Input error: {message}")]
    Input {
        /// Which validation step failed
        kind: InputErrorKind,
        /// Short human-readable message returned to the caller
        message: String,
    },

    /// Store operation error (query/upsert failure, unacknowledged write)
    #[error("Store error: {message}")]
    Store {
        /// Description of the store error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Unsupported HTTP method, not treated as a server fault
    #[error("Method {method} not allowed")]
    MethodNotAllowed {
        /// The rejected HTTP method
        method: String,
    },

    /// JSON serialization error from internal handling
    #[error("JSON error: {source}")]
    Serialization {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Input error creation methods
impl Error {
    /// Create an input error of the given kind
    pub fn input<S: Into<String>>(kind: InputErrorKind, message: S) -> Self {
        Self::Input {
            kind,
            message: message.into(),
        }
    }

    /// Create a missing-body input error
    pub fn missing_body() -> Self {
        Self::input(InputErrorKind::MissingBody, "Request body is missing.")
    }

    /// Create a malformed-JSON input error
    pub fn malformed_json() -> Self {
        Self::input(
            InputErrorKind::MalformedJson,
            "Invalid JSON in request body.",
        )
    }

    /// Create a missing-payload input error
    pub fn missing_payload() -> Self {
        Self::input(InputErrorKind::MissingPayload, "Missing data payload.")
    }

    /// Create a credential-required input error
    pub fn credential_required() -> Self {
        Self::input(InputErrorKind::CredentialRequired, "Password is required.")
    }

    /// Create a credential-rejected input error
    pub fn credential_rejected() -> Self {
        Self::input(InputErrorKind::CredentialRejected, "Invalid password.")
    }
}

// Store and method error creation methods
impl Error {
    /// Create a store error
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
            source: None,
        }
    }

    /// Create a store error with source
    pub fn store_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Store {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a method-not-allowed error
    pub fn method_not_allowed<S: Into<String>>(method: S) -> Self {
        Self::MethodNotAllowed {
            method: method.into(),
        }
    }
}

impl Error {
    /// The input sub-kind, if this is an input error
    pub fn input_kind(&self) -> Option<InputErrorKind> {
        match self {
            Self::Input { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_helpers_carry_their_kind() {
        assert_eq!(
            Error::missing_body().input_kind(),
            Some(InputErrorKind::MissingBody)
        );
        assert_eq!(
            Error::malformed_json().input_kind(),
            Some(InputErrorKind::MalformedJson)
        );
        assert_eq!(
            Error::missing_payload().input_kind(),
            Some(InputErrorKind::MissingPayload)
        );
        assert_eq!(
            Error::credential_required().input_kind(),
            Some(InputErrorKind::CredentialRequired)
        );
        assert_eq!(
            Error::credential_rejected().input_kind(),
            Some(InputErrorKind::CredentialRejected)
        );
    }

    #[test]
    fn credential_outcomes_are_distinct() {
        assert_ne!(
            Error::credential_required().input_kind(),
            Error::credential_rejected().input_kind()
        );
    }

    #[test]
    fn non_input_errors_have_no_input_kind() {
        assert!(Error::config("missing url").input_kind().is_none());
        assert!(Error::store("upsert failed").input_kind().is_none());
        assert!(Error::method_not_allowed("DELETE").input_kind().is_none());
    }

    #[test]
    fn display_includes_message() {
        let err = Error::config("store URL is missing");
        assert_eq!(
            err.to_string(),
            "Configuration error: store URL is missing"
        );

        let err = Error::method_not_allowed("PATCH");
        assert_eq!(err.to_string(), "Method PATCH not allowed");
    }

    #[test]
    fn store_error_preserves_source() {
        let source = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let err = Error::store_with_source("store unreachable", source);
        assert!(std::error::Error::source(&err).is_some());
    }
}
