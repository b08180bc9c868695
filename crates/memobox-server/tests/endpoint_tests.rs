//! State endpoint tests
//!
//! Exercises the full HTTP surface against the in-memory store using
//! Rocket's local asynchronous client: the load/save contract, the
//! validation chain and its distinct failure modes, the store
//! availability gate, and the CORS headers.

use async_trait::async_trait;
use memobox_domain::error::{Error, Result};
use memobox_domain::StateStoreProvider;
use memobox_infrastructure::config::WriteAuthConfig;
use memobox_providers::InMemoryStateStore;
use memobox_server::routes::endpoint_rocket;
use memobox_server::state::{EndpointState, StoreGate};
use rocket::http::Status;
use rocket::local::asynchronous::Client;
use serde_json::{json, Value};
use std::sync::Arc;

/// Store that fails every call, for exercising the 500 path
#[derive(Debug)]
struct FailingStateStore;

#[async_trait]
impl StateStoreProvider for FailingStateStore {
    async fn fetch(&self, _key: &str) -> Result<Option<Value>> {
        Err(Error::store("select timed out"))
    }

    async fn upsert(&self, _key: &str, _payload: &Value) -> Result<()> {
        Err(Error::store("upsert not acknowledged"))
    }

    fn provider_name(&self) -> &str {
        "failing"
    }
}

async fn client_with(gate: StoreGate, write_auth: WriteAuthConfig) -> Client {
    Client::tracked(endpoint_rocket(EndpointState::new(gate, write_auth)))
        .await
        .expect("valid rocket instance")
}

/// Client over a fresh in-memory store without write protection
async fn open_client() -> Client {
    client_with(
        StoreGate::ready(Arc::new(InMemoryStateStore::new())),
        WriteAuthConfig::default(),
    )
    .await
}

/// Client over a fresh in-memory store requiring the given password
async fn protected_client(password: &str) -> Client {
    client_with(
        StoreGate::ready(Arc::new(InMemoryStateStore::new())),
        WriteAuthConfig {
            enabled: true,
            password: Some(password.to_string()),
        },
    )
    .await
}

async fn body_json(response: rocket::local::asynchronous::LocalResponse<'_>) -> Value {
    let body = response.into_string().await.expect("response body");
    serde_json::from_str(&body).expect("JSON body")
}

#[rocket::async_test]
async fn load_before_first_save_returns_empty_object() {
    let client = open_client().await;

    let response = client.get("/state").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(body_json(response).await, json!({}));
}

#[rocket::async_test]
async fn save_then_load_round_trips() {
    let client = open_client().await;
    let payload = json!({"students": ["ada", "grace"], "notes": {"week": 3}});

    let response = client
        .post("/state")
        .body(json!({"data": payload}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let ack = body_json(response).await;
    assert_eq!(ack["success"], true);
    assert_eq!(ack["message"], "Data saved successfully.");

    let response = client.get("/state").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(body_json(response).await, payload);
}

#[rocket::async_test]
async fn second_save_replaces_wholesale() {
    let client = open_client().await;

    let response = client
        .post("/state")
        .body(json!({"data": {"count": 1, "extra": "kept?"}}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let response = client
        .post("/state")
        .body(json!({"data": {"count": 2}}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    // Full replace: no merging of the first payload's fields
    let response = client.get("/state").dispatch().await;
    assert_eq!(body_json(response).await, json!({"count": 2}));
}

#[rocket::async_test]
async fn empty_object_and_non_object_payloads_are_accepted() {
    for payload in [json!({}), json!([1, 2, 3]), json!("plain text"), json!(42)] {
        let client = open_client().await;
        let response = client
            .post("/state")
            .body(json!({"data": payload}).to_string())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let response = client.get("/state").dispatch().await;
        assert_eq!(body_json(response).await, payload);
    }
}

#[rocket::async_test]
async fn missing_body_is_rejected() {
    let client = open_client().await;

    let response = client.post("/state").dispatch().await;
    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(
        body_json(response).await["error"],
        "Request body is missing."
    );

    let response = client.post("/state").body("").dispatch().await;
    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(
        body_json(response).await["error"],
        "Request body is missing."
    );
}

#[rocket::async_test]
async fn whitespace_only_body_is_present_but_not_json() {
    let client = open_client().await;

    // A body of spaces is a body; it fails at the JSON parse, not the
    // presence check
    let response = client.post("/state").body("   ").dispatch().await;
    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(
        body_json(response).await["error"],
        "Invalid JSON in request body."
    );
}

#[rocket::async_test]
async fn malformed_json_is_rejected_without_touching_the_store() {
    let client = open_client().await;

    let response = client.post("/state").body("{not json").dispatch().await;
    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(
        body_json(response).await["error"],
        "Invalid JSON in request body."
    );

    // Store untouched
    let response = client.get("/state").dispatch().await;
    assert_eq!(body_json(response).await, json!({}));
}

#[rocket::async_test]
async fn null_or_absent_data_is_rejected_without_touching_the_store() {
    let client = open_client().await;

    for body in [json!({"data": null}), json!({"other": 1})] {
        let response = client
            .post("/state")
            .body(body.to_string())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(body_json(response).await["error"], "Missing data payload.");
    }

    let response = client.get("/state").dispatch().await;
    assert_eq!(body_json(response).await, json!({}));
}

#[rocket::async_test]
async fn absent_and_wrong_credentials_are_distinct_outcomes() {
    let client = protected_client("chalkboard").await;

    // Forgot the password entirely
    let response = client
        .post("/state")
        .body(json!({"data": {"count": 1}}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Unauthorized);

    // Explicit null counts as absent
    let response = client
        .post("/state")
        .body(json!({"data": {"count": 1}, "password": null}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Unauthorized);

    // Wrong password
    let response = client
        .post("/state")
        .body(json!({"data": {"count": 1}, "password": "blackboard"}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Forbidden);

    // Nothing was written
    let response = client.get("/state").dispatch().await;
    assert_eq!(body_json(response).await, json!({}));

    // Correct password
    let response = client
        .post("/state")
        .body(json!({"data": {"count": 1}, "password": "chalkboard"}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let response = client.get("/state").dispatch().await;
    assert_eq!(body_json(response).await, json!({"count": 1}));
}

#[rocket::async_test]
async fn credential_check_runs_before_payload_check() {
    let client = protected_client("chalkboard").await;

    // Both password and data are bad; the credential failure wins
    let response = client
        .post("/state")
        .body(json!({"data": null}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Unauthorized);
}

#[rocket::async_test]
async fn protection_enabled_without_password_is_a_config_error() {
    let client = client_with(
        StoreGate::ready(Arc::new(InMemoryStateStore::new())),
        WriteAuthConfig {
            enabled: true,
            password: None,
        },
    )
    .await;

    let response = client
        .post("/state")
        .body(json!({"data": {}, "password": "anything"}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::InternalServerError);
    assert_eq!(
        body_json(response).await["error"],
        "Server configuration error."
    );
}

#[rocket::async_test]
async fn preflight_always_succeeds() {
    let client = open_client().await;
    let response = client.options("/state").dispatch().await;
    assert_eq!(response.status(), Status::NoContent);

    // Even with an unavailable store
    let client = client_with(
        StoreGate::unavailable("store URL missing"),
        WriteAuthConfig::default(),
    )
    .await;
    let response = client.options("/state").dispatch().await;
    assert_eq!(response.status(), Status::NoContent);
}

#[rocket::async_test]
async fn other_methods_are_not_allowed() {
    let client = open_client().await;

    let response = client.put("/state").dispatch().await;
    assert_eq!(response.status(), Status::MethodNotAllowed);
    assert_eq!(body_json(response).await["error"], "Method PUT not allowed.");

    let response = client.delete("/state").dispatch().await;
    assert_eq!(response.status(), Status::MethodNotAllowed);

    let response = client.patch("/state").dispatch().await;
    assert_eq!(response.status(), Status::MethodNotAllowed);

    // Store untouched
    let response = client.get("/state").dispatch().await;
    assert_eq!(body_json(response).await, json!({}));
}

#[rocket::async_test]
async fn unavailable_store_fails_fast_with_config_error() {
    let client = client_with(
        StoreGate::unavailable("Supabase store requires store.url"),
        WriteAuthConfig::default(),
    )
    .await;

    let response = client.get("/state").dispatch().await;
    assert_eq!(response.status(), Status::InternalServerError);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Server configuration error.");
    assert_eq!(body["details"], "Supabase store requires store.url");

    let response = client
        .post("/state")
        .body(json!({"data": {}}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::InternalServerError);

    // Health stays functional and reports the gate state
    let response = client.get("/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(body_json(response).await["store"], "unavailable");
}

#[rocket::async_test]
async fn store_failures_surface_as_internal_errors() {
    let client = client_with(
        StoreGate::ready(Arc::new(FailingStateStore)),
        WriteAuthConfig::default(),
    )
    .await;

    let response = client.get("/state").dispatch().await;
    assert_eq!(response.status(), Status::InternalServerError);
    let body = body_json(response).await;
    assert_eq!(body["error"], "An error occurred while processing your request.");
    assert_eq!(body["details"], "select timed out");

    let response = client
        .post("/state")
        .body(json!({"data": {"count": 1}}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::InternalServerError);
    assert_eq!(
        body_json(response).await["details"],
        "upsert not acknowledged"
    );
}

#[rocket::async_test]
async fn every_response_carries_the_cors_headers() {
    let client = open_client().await;

    let check = |response: &rocket::local::asynchronous::LocalResponse<'_>| {
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Origin"),
            Some("*")
        );
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Headers"),
            Some("Content-Type")
        );
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Methods"),
            Some("GET, POST, OPTIONS")
        );
    };

    // 200
    let response = client.get("/state").dispatch().await;
    check(&response);
    // 204
    let response = client.options("/state").dispatch().await;
    check(&response);
    // 400
    let response = client.post("/state").dispatch().await;
    check(&response);
    // 405
    let response = client.delete("/state").dispatch().await;
    check(&response);

    // 500
    let client = client_with(
        StoreGate::unavailable("store URL missing"),
        WriteAuthConfig::default(),
    )
    .await;
    let response = client.get("/state").dispatch().await;
    check(&response);
}

#[rocket::async_test]
async fn health_reports_the_active_provider() {
    let client = open_client().await;
    let response = client.get("/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["store"], "memory");
}
