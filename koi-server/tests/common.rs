use std::{collections::HashMap, net::SocketAddr, time::Duration};

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_test::TestServer;
use koi_config::{Config, ConfigMetadata, ServerConfig, UpstreamConfig};
use koi_server::{AppState, create_app};
use serde_json::json;
use url::Url;

/// Fake TAP endpoint. The ADQL text picks the canned answer.
async fn fake_tap(Query(params): Query<HashMap<String, String>>) -> Response {
    let query = params.get("query").cloned().unwrap_or_default();
    match query.as_str() {
        "rows" => Json(json!([
            {"kepoi_name": "K00752.01", "koi_prad": 2.26},
            {"kepoi_name": "K00752.02", "koi_prad": null}
        ]))
        .into_response(),
        "unavailable" => {
            (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable").into_response()
        }
        "missing" => (StatusCode::NOT_FOUND, "Not Found").into_response(),
        "json-error" => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "bad ADQL"})),
        )
            .into_response(),
        "votable" => "<VOTABLE/>".into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!([])).into_response()
        }
        "echo-format" => Json(json!([{"format": params.get("format")}])).into_response(),
        "SELECT table_name FROM TAP_SCHEMA.tables" => Json(json!([
            {"table_name": "ps"},
            {"table_name": "cumulative"},
            {"table_name": "k2pandc"}
        ]))
        .into_response(),
        "SELECT kepoi_name FROM cumulative WHERE ROWNUM <= 1" => {
            Json(json!([{"kepoi_name": "K00752.01"}])).into_response()
        }
        "SELECT * FROM cumulative WHERE ROWNUM <= 1" => Json(json!([
            {"kepoi_name": "K00752.01", "kepid": 10797460, "dec": 48.141651}
        ]))
        .into_response(),
        q if q.starts_with("SELECT column_name FROM TAP_SCHEMA.columns") => {
            if q.ends_with("'cumulative'") {
                Json(json!([{"column_name": "kepid"}, {"column_name": "dec"}]))
                    .into_response()
            } else {
                "ERROR: table not found".into_response()
            }
        }
        _ => (StatusCode::BAD_REQUEST, "unexpected query").into_response(),
    }
}

/// Starts the fake TAP service and returns its endpoint.
#[allow(unused)]
pub async fn spawn_fake_tap() -> Result<Url> {
    let app = Router::new().route("/TAP/sync", get(fake_tap));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("bind fake TAP service")?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(Url::parse(&format!("http://{addr}/TAP/sync"))?)
}

#[allow(unused)]
pub fn test_config(endpoint: Url, timeout: Duration) -> Config {
    Config {
        server: ServerConfig::default(),
        upstream: UpstreamConfig { endpoint, timeout },
        metadata: ConfigMetadata::default(),
    }
}

/// Proxy wired to a fresh fake TAP service.
#[allow(unused)]
pub async fn proxy_server() -> Result<TestServer> {
    proxy_server_with_timeout(Duration::from_secs(30)).await
}

#[allow(unused)]
pub async fn proxy_server_with_timeout(timeout: Duration) -> Result<TestServer> {
    let endpoint = spawn_fake_tap().await?;
    let state = AppState::new(test_config(endpoint, timeout))?;
    TestServer::builder()
        .http_transport()
        .build(create_app(state).into_make_service())
        .map_err(|err| anyhow::anyhow!(err.to_string()))
}
