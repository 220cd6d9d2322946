//! Outbound calls to the TAP service.

use std::time::Duration;

use koi_config::UpstreamConfig;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};
use url::Url;

#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The service answered with a non-2xx status. `body` falls back to the
    /// status reason when the service sent nothing.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// A 2xx body that is not JSON.
    #[error("non-JSON response from upstream")]
    NotJson { body: String },

    #[error("Request timeout")]
    Timeout,

    #[error(transparent)]
    Transport(reqwest::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout
        } else {
            UpstreamError::Transport(err)
        }
    }
}

/// Single-shot client for `GET <endpoint>?query=&format=`.
#[derive(Debug, Clone)]
pub struct TapClient {
    http: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl TapClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(UpstreamError::Client)?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            timeout: config.timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn request_url(&self, query: &str, format: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("format", format);
        url
    }

    /// Raw body of a 2xx response.
    pub async fn fetch_text(&self, query: &str, format: &str) -> Result<String, UpstreamError> {
        let url = self.request_url(query, format);
        debug!(%url, "proxying request");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        error!(status = status.as_u16(), %body, "upstream returned an error");
        let body = if body.is_empty() {
            status.canonical_reason().unwrap_or_default().to_string()
        } else {
            body
        };
        Err(UpstreamError::Status {
            status: status.as_u16(),
            body,
        })
    }

    /// Body of a 2xx response parsed as JSON.
    pub async fn fetch_json(&self, query: &str, format: &str) -> Result<Value, UpstreamError> {
        let body = self.fetch_text(query, format).await?;
        serde_json::from_str(&body).map_err(|_| {
            error!(%body, "non-JSON response from upstream");
            UpstreamError::NotJson { body }
        })
    }
}

/// First `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TapClient {
        TapClient::new(&UpstreamConfig {
            endpoint: Url::parse("https://exoplanetarchive.ipac.caltech.edu/TAP/sync").unwrap(),
            timeout: Duration::from_secs(30),
        })
        .unwrap()
    }

    #[test]
    fn request_url_encodes_query() {
        let url = client().request_url("SELECT kepid FROM cumulative WHERE koi_prad < 1.6", "json");
        assert_eq!(
            url.as_str(),
            "https://exoplanetarchive.ipac.caltech.edu/TAP/sync?\
             query=SELECT+kepid+FROM+cumulative+WHERE+koi_prad+%3C+1.6&format=json"
        );
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_chars("Service Unavailable", 500), "Service Unavailable");
        assert_eq!(truncate_chars(&"é".repeat(600), 500).chars().count(), 500);
    }
}
