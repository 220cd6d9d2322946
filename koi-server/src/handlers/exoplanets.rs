use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::infra::{
    app_state::AppState,
    errors::{AppResult, ProxyError},
};

/// Format requested from the archive when the caller does not name one.
pub const DEFAULT_FORMAT: &str = "json";

#[derive(Debug, Deserialize)]
pub struct ExoplanetParams {
    pub query: Option<String>,
    pub format: Option<String>,
}

/// `GET /api/exoplanets?query=&format=`: forwards the query and relays the
/// archive's JSON verbatim.
pub async fn proxy_handler(
    State(state): State<AppState>,
    Query(params): Query<ExoplanetParams>,
) -> AppResult<Json<Value>> {
    let query = params
        .query
        .filter(|query| !query.is_empty())
        .ok_or_else(|| ProxyError::bad_request("Query parameter is required"))?;
    let format = params
        .format
        .filter(|format| !format.is_empty())
        .unwrap_or_else(|| DEFAULT_FORMAT.to_string());

    info!(query_len = query.len(), %format, "proxying catalog query");
    let body = state.tap.fetch_json(&query, &format).await?;
    Ok(Json(body))
}

pub async fn method_not_allowed() -> ProxyError {
    ProxyError::method_not_allowed()
}
