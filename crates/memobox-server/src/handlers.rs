//! Route handler functions
//!
//! The endpoint's linear validation chain lives here. Order matters and
//! is part of the contract: store availability, then body presence, then
//! JSON well-formedness, then the write credential, then the payload
//! field. Each step is a distinct failure mode; input and configuration
//! errors return before any store call is attempted.

use crate::responses::{error_response, ApiError, SaveAck};
use crate::state::EndpointState;
use memobox_domain::constants::STATE_RECORD_KEY;
use memobox_domain::error::Error;
use memobox_domain::StateStoreProvider;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{delete, get, options, patch, post, put, State};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Cross-origin preflight
///
/// Answers unconditionally with success and no further processing,
/// independent of store availability. The CORS fairing attaches the
/// allow headers.
#[options("/state")]
pub fn preflight() -> Status {
    debug!("Handling preflight request");
    Status::NoContent
}

/// Load the stored application state
///
/// Returns the stored payload, or an empty object when no save has
/// happened yet - absence is not an error. Store failures are never
/// converted into absence.
#[get("/state")]
pub async fn load_state(state: &State<EndpointState>) -> Result<Json<Value>, ApiError> {
    let store = checked_store(state)?;

    debug!("Executing load");
    match store.fetch(STATE_RECORD_KEY).await {
        Ok(Some(payload)) => Ok(Json(payload)),
        Ok(None) => Ok(Json(Value::Object(serde_json::Map::new()))),
        Err(e) => {
            error!(error = %e, "Load failed");
            Err(error_response(&e))
        }
    }
}

/// Save the application state
///
/// Body shape: `{ "data": <payload>, "password": <string> }` where
/// `password` is consulted only when write protection is enabled. The
/// payload may be any JSON type including an empty object; only an
/// absent or null `data` field is rejected.
#[post("/state", data = "<body>")]
pub async fn save_state(
    body: Option<String>,
    state: &State<EndpointState>,
) -> Result<Json<SaveAck>, ApiError> {
    let store = checked_store(state)?;

    // Only a truly empty body counts as missing; a whitespace-only body
    // is present and fails at the JSON parse below.
    let body = match body {
        Some(body) if !body.is_empty() => body,
        _ => return Err(reject(Error::missing_body())),
    };

    let body: Value = match serde_json::from_str(&body) {
        Ok(body) => body,
        Err(_) => return Err(reject(Error::malformed_json())),
    };

    if state.write_auth.enabled {
        if !state.write_auth.is_configured() {
            let err = Error::config(
                "Write protection is enabled but no password is configured",
            );
            error!(error = %err, "Save rejected");
            return Err(error_response(&err));
        }
        match body.get("password") {
            None | Some(Value::Null) => return Err(reject(Error::credential_required())),
            Some(provided) => {
                // Non-string credentials can never match the configured secret
                let provided = provided.as_str().unwrap_or_default();
                if !state.write_auth.validate_password(provided) {
                    return Err(reject(Error::credential_rejected()));
                }
            }
        }
    }

    let payload = match body.get("data") {
        None | Some(Value::Null) => return Err(reject(Error::missing_payload())),
        Some(payload) => payload,
    };

    debug!("Executing save");
    match store.upsert(STATE_RECORD_KEY, payload).await {
        Ok(()) => Ok(Json(SaveAck::saved())),
        Err(e) => {
            error!(error = %e, "Save failed");
            Err(error_response(&e))
        }
    }
}

/// Liveness probe, independent of the store
#[get("/health")]
pub fn health(state: &State<EndpointState>) -> Json<Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "store": state.gate.provider_name().unwrap_or("unavailable"),
    }))
}

/// PUT is not part of the surface
#[put("/state")]
pub fn put_state() -> ApiError {
    reject(Error::method_not_allowed("PUT"))
}

/// DELETE is not part of the surface - no deletion operation exists
#[delete("/state")]
pub fn delete_state() -> ApiError {
    reject(Error::method_not_allowed("DELETE"))
}

/// PATCH is not part of the surface - saves replace wholesale
#[patch("/state")]
pub fn patch_state() -> ApiError {
    reject(Error::method_not_allowed("PATCH"))
}

/// The store behind the availability gate, mapped for fail-fast responses
fn checked_store(
    state: &State<EndpointState>,
) -> Result<&Arc<dyn StateStoreProvider>, ApiError> {
    state.gate.store().map_err(|e| {
        error!(error = %e, "Store client not available");
        error_response(&e)
    })
}

/// Log and map a client-side rejection
fn reject(err: Error) -> ApiError {
    warn!(error = %err, "Request rejected");
    error_response(&err)
}
