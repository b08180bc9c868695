//! HTTP endpoint for the MemoBox state service
//!
//! Exposes the two logical operations - load and save of the singleton
//! application state - over HTTP, with an optional shared-password gate
//! on saves, a permissive CORS policy, and uniform error mapping. Store
//! backends are injected through the `StateStoreProvider` port.

/// Permissive CORS response fairing
pub mod cors;
/// Route handler functions
pub mod handlers;
/// Domain error to HTTP response mapping
pub mod responses;
/// Rocket instance assembly
pub mod routes;
/// Shared endpoint state and the store availability gate
pub mod state;

use memobox_infrastructure::config::AppConfig;
use memobox_infrastructure::init_logging;
use memobox_providers::create_state_store;
use rocket::{Build, Rocket};
use state::{EndpointState, StoreGate};
use tracing::{error, info};

/// Build the endpoint Rocket instance from loaded configuration
///
/// Provider construction happens exactly once, here. A failure does not
/// abort: the endpoint launches with an unavailable store gate and every
/// load/save answers with the configuration-error response, while
/// preflight and health stay functional.
pub fn build_endpoint(config: &AppConfig) -> Rocket<Build> {
    info!(
        provider = %config.store.provider,
        url_present = config.store.url.is_some(),
        service_key_present = config.store.service_key.is_some(),
        write_protection = config.auth.write.enabled,
        "Building state endpoint"
    );

    let gate = match create_state_store(&config.store) {
        Ok(store) => {
            info!(provider = store.provider_name(), "Store client ready");
            StoreGate::ready(store)
        }
        Err(e) => {
            error!(error = %e, "Store client could not be built");
            StoreGate::unavailable(e.to_string())
        }
    };

    let state = EndpointState::new(gate, config.auth.write.clone());

    let figment = rocket::Config::figment()
        .merge(("address", config.server.host.clone()))
        .merge(("port", config.server.port));

    routes::endpoint_rocket(state).configure(figment)
}

/// Load configuration, initialize logging, and launch the endpoint
///
/// `host` and `port` are CLI-level overrides applied after the normal
/// configuration layering.
pub async fn run_with_overrides(
    config_path: Option<&std::path::Path>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut loader = memobox_infrastructure::config::ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load()?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    init_logging(&config.logging)?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("State endpoint listening on {}", addr);

    build_endpoint(&config)
        .launch()
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)?;

    Ok(())
}
