//! HTTP proxy between the KOI explorer and the NASA Exoplanet Archive.
//!
//! The proxy forwards `GET /api/exoplanets?query=&format=` to the archive's
//! synchronous TAP endpoint, relays the JSON it gets back and adds permissive
//! CORS headers so a browser client can call it from any origin.

pub mod handlers;
pub mod infra;
pub mod routes;
pub mod upstream;

pub use infra::{
    app_state::AppState,
    errors::{AppResult, ProxyError},
};
pub use routes::create_app;
pub use upstream::{TapClient, UpstreamError};
