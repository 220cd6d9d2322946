use std::{path::PathBuf, time::Duration};

use url::Url;

/// Default listen address.
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
/// Default listen port.
pub const DEFAULT_SERVER_PORT: u16 = 3001;
/// Synchronous TAP endpoint of the NASA Exoplanet Archive.
pub const DEFAULT_TAP_ENDPOINT: &str =
    "https://exoplanetarchive.ipac.caltech.edu/TAP/sync";
/// Upstream request timeout in seconds.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Fully resolved proxy configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address.
    pub server: ServerConfig,
    /// Archive the proxy forwards to.
    pub upstream: UpstreamConfig,
    /// Where the values came from.
    pub metadata: ConfigMetadata,
}

impl Config {
    /// `host:port` string suitable for binding a listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Listen address of the proxy.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
        }
    }
}

/// Upstream TAP service settings.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Synchronous TAP query endpoint.
    pub endpoint: Url,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// Provenance of the loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    /// TOML file that contributed values, if any.
    pub config_path: Option<PathBuf>,
    /// Whether a `.env` file was read.
    pub env_file_loaded: bool,
}
