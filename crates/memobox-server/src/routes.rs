//! Rocket instance assembly
//!
//! Mounts the state endpoint routes and attaches the CORS fairing.

use crate::cors::Cors;
use crate::handlers;
use crate::state::EndpointState;
use rocket::{routes, Build, Rocket};

/// Create the endpoint rocket instance
///
/// Routes:
/// - OPTIONS `/state` - capability preflight, always succeeds
/// - GET `/state` - stored payload or `{}`
/// - POST `/state` - validate and upsert the payload
/// - PUT/DELETE/PATCH `/state` - 405
/// - GET `/health` - liveness probe
pub fn endpoint_rocket(state: EndpointState) -> Rocket<Build> {
    rocket::build().manage(state).attach(Cors).mount(
        "/",
        routes![
            handlers::preflight,
            handlers::load_state,
            handlers::save_state,
            handlers::put_state,
            handlers::delete_state,
            handlers::patch_state,
            handlers::health,
        ],
    )
}
