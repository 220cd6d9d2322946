use axum::{
    Router,
    http::{Method, header},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{diagnostics, exoplanets},
    infra::app_state::AppState,
};

pub const EXOPLANETS: &str = "/api/exoplanets";
pub const PING: &str = "/ping";
pub const HEALTH: &str = "/health";
pub const TABLES: &str = "/tables";
pub const SCHEMA: &str = "/schema/{table_name}";
pub const TEST: &str = "/test";

/// Router with every endpoint, open CORS and request tracing.
///
/// OPTIONS requests never reach a handler; the CORS layer answers them.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            EXOPLANETS,
            get(exoplanets::proxy_handler).fallback(exoplanets::method_not_allowed),
        )
        .route(PING, get(diagnostics::ping_handler))
        .route(HEALTH, get(diagnostics::health_handler))
        .route(TABLES, get(diagnostics::tables_handler))
        .route(SCHEMA, get(diagnostics::schema_handler))
        .route(TEST, get(diagnostics::test_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
