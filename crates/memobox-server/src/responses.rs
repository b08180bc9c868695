//! Domain error to HTTP response mapping
//!
//! The single place where the closed error taxonomy becomes status codes
//! and JSON bodies. Handlers return domain errors; nothing else in the
//! crate decides status codes.

use memobox_domain::error::{Error, InputErrorKind};
use rocket::http::Status;
use rocket::serde::json::Json;
use serde::Serialize;

/// JSON body for every failure response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Short caller-facing message
    pub error: String,
    /// Underlying diagnostics, attached for 500-class responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// JSON body acknowledging a successful save
#[derive(Debug, Serialize)]
pub struct SaveAck {
    /// Always true on the success path
    pub success: bool,
    /// Human-readable confirmation
    pub message: String,
}

impl SaveAck {
    /// The standard save acknowledgment
    pub fn saved() -> Self {
        Self {
            success: true,
            message: "Data saved successfully.".to_string(),
        }
    }
}

/// Failure responder: status plus JSON error body
pub type ApiError = (Status, Json<ErrorBody>);

/// Map a domain error to its HTTP response
///
/// - configuration errors: 500 with a stable "server configuration
///   error" message so they are distinguishable from store failures
/// - input errors: 400/401/403 depending on the sub-kind
/// - store errors: 500 with the underlying message as diagnostics
/// - unsupported method: 405
pub fn error_response(err: &Error) -> ApiError {
    match err {
        Error::Config { message, .. } => (
            Status::InternalServerError,
            Json(ErrorBody {
                error: "Server configuration error.".to_string(),
                details: Some(message.clone()),
            }),
        ),
        Error::Input { kind, message } => {
            let status = match kind {
                InputErrorKind::MissingBody
                | InputErrorKind::MalformedJson
                | InputErrorKind::MissingPayload => Status::BadRequest,
                InputErrorKind::CredentialRequired => Status::Unauthorized,
                InputErrorKind::CredentialRejected => Status::Forbidden,
            };
            (
                status,
                Json(ErrorBody {
                    error: message.clone(),
                    details: None,
                }),
            )
        }
        Error::Store { message, .. } => (
            Status::InternalServerError,
            Json(ErrorBody {
                error: "An error occurred while processing your request.".to_string(),
                details: Some(message.clone()),
            }),
        ),
        Error::MethodNotAllowed { method } => (
            Status::MethodNotAllowed,
            Json(ErrorBody {
                error: format!("Method {method} not allowed."),
                details: None,
            }),
        ),
        Error::Serialization { source } => (
            Status::InternalServerError,
            Json(ErrorBody {
                error: "An error occurred while processing your request.".to_string(),
                details: Some(source.to_string()),
            }),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_map_to_500_with_details() {
        let (status, body) = error_response(&Error::config("store URL missing"));
        assert_eq!(status, Status::InternalServerError);
        assert_eq!(body.error, "Server configuration error.");
        assert_eq!(body.details.as_deref(), Some("store URL missing"));
    }

    #[test]
    fn input_kinds_map_to_distinct_statuses() {
        let (status, _) = error_response(&Error::missing_body());
        assert_eq!(status, Status::BadRequest);
        let (status, _) = error_response(&Error::malformed_json());
        assert_eq!(status, Status::BadRequest);
        let (status, _) = error_response(&Error::missing_payload());
        assert_eq!(status, Status::BadRequest);
        let (status, _) = error_response(&Error::credential_required());
        assert_eq!(status, Status::Unauthorized);
        let (status, _) = error_response(&Error::credential_rejected());
        assert_eq!(status, Status::Forbidden);
    }

    #[test]
    fn store_errors_keep_diagnostics_out_of_the_headline() {
        let (status, body) = error_response(&Error::store("upsert not acknowledged"));
        assert_eq!(status, Status::InternalServerError);
        assert_eq!(
            body.error,
            "An error occurred while processing your request."
        );
        assert_eq!(body.details.as_deref(), Some("upsert not acknowledged"));
    }

    #[test]
    fn unsupported_method_maps_to_405() {
        let (status, body) = error_response(&Error::method_not_allowed("DELETE"));
        assert_eq!(status, Status::MethodNotAllowed);
        assert_eq!(body.error, "Method DELETE not allowed.");
    }
}
