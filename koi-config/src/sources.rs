use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::util::{non_empty_var, parse_var};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    /// `[server]` table.
    #[serde(default)]
    pub server: FileServerConfig,
    /// `[upstream]` table.
    #[serde(default)]
    pub upstream: FileUpstreamConfig,
}

/// `[server]` table.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    /// Listen interface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Listen port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

/// `[upstream]` table.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileUpstreamConfig {
    /// TAP sync endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Request timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    /// `SERVER_HOST`
    pub server_host: Option<String>,
    /// `SERVER_PORT`
    pub server_port: Option<u16>,
    /// `KOI_TAP_ENDPOINT`
    pub tap_endpoint: Option<String>,
    /// `KOI_UPSTREAM_TIMEOUT_SECS`
    pub upstream_timeout_secs: Option<u64>,
    /// `KOI_CONFIG_PATH`
    pub config_path: Option<PathBuf>,
}

impl EnvConfig {
    /// Reads every supported variable from the process environment.
    pub fn gather() -> Self {
        Self {
            server_host: non_empty_var("SERVER_HOST"),
            server_port: parse_var("SERVER_PORT"),
            tap_endpoint: non_empty_var("KOI_TAP_ENDPOINT"),
            upstream_timeout_secs: parse_var("KOI_UPSTREAM_TIMEOUT_SECS"),
            config_path: non_empty_var("KOI_CONFIG_PATH").map(PathBuf::from),
        }
    }
}
