use async_trait::async_trait;
use koi_model::{ExoplanetRow, value_text};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::error::FetchError;

/// Public deployment of the archive proxy.
pub const DEFAULT_PROXY_ENDPOINT: &str =
    "https://koi-data-explorer.vercel.app/api/exoplanets";

/// Anything that can run an ADQL query and hand back catalog rows.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Runs `query` once. No retries.
    ///
    /// Rows come back as received, without checking any column. Each element
    /// of the response array must still be a JSON object; anything else is
    /// [`FetchError::UnexpectedShape`].
    async fn fetch(&self, query: &str) -> Result<Vec<ExoplanetRow>, FetchError>;
}

/// Client for the archive proxy's `GET ?query=&format=json` endpoint.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl CatalogClient {
    /// Client for `endpoint` with a default `reqwest` client.
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Client for `endpoint` sharing an existing `reqwest` client.
    pub fn with_client(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    /// Parses `endpoint` and builds a client for it.
    pub fn from_endpoint(endpoint: &str) -> Result<Self, FetchError> {
        Ok(Self::new(Url::parse(endpoint)?))
    }

    /// Endpoint queries are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Full request URL for `query`.
    pub fn request_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("format", "json");
        url
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch(&self, query: &str) -> Result<Vec<ExoplanetRow>, FetchError> {
        if query.trim().is_empty() {
            return Err(FetchError::MissingQuery);
        }

        let url = self.request_url(query);
        debug!(endpoint = %self.endpoint, query_len = query.len(), "fetching catalog rows");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });
            warn!(status = status.as_u16(), %message, "catalog request failed");
            return Err(FetchError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let rows = parse_rows(&body)?;
        debug!(rows = rows.len(), "catalog rows received");
        Ok(rows)
    }
}

/// Decodes a successful response body into rows.
///
/// An object carrying `error` becomes [`FetchError::Api`]; anything other
/// than an array of objects becomes [`FetchError::UnexpectedShape`].
pub fn parse_rows(body: &str) -> Result<Vec<ExoplanetRow>, FetchError> {
    let value: Value = serde_json::from_str(body)?;

    if let Some(message) = value.get("error").and_then(value_text) {
        return Err(FetchError::Api(message));
    }

    let Value::Array(items) = value else {
        return Err(FetchError::UnexpectedShape);
    };

    items
        .into_iter()
        .map(|item| ExoplanetRow::from_value(item).ok_or(FetchError::UnexpectedShape))
        .collect()
}

fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("error").and_then(value_text)
}
