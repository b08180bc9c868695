//! CORS response fairing
//!
//! The endpoint is called from classroom browsers on arbitrary origins,
//! so every response carries a permissive cross-origin policy. This is a
//! deliberate, known-open security posture carried forward from the
//! deployed service; tightening it would be a behavior change for
//! existing clients (see DESIGN.md).

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Request, Response};

/// CORS Fairing for Rocket
///
/// Adds the allow-any-origin headers to all responses, including error
/// responses produced by the handlers.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Headers",
            "Content-Type",
        ));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, OPTIONS",
        ));
    }
}
