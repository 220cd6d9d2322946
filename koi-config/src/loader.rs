use once_cell::sync::Lazy;
use std::{fs, path::PathBuf, time::Duration};
use thiserror::Error;
use url::Url;

use super::{
    models::{
        Config, ConfigMetadata, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
        DEFAULT_TAP_ENDPOINT, DEFAULT_UPSTREAM_TIMEOUT_SECS, ServerConfig,
        UpstreamConfig,
    },
    sources::{EnvConfig, FileConfig},
    validation::ConfigWarnings,
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![PathBuf::from("koi.toml"), PathBuf::from("config/koi.toml")]
});

/// Knobs for [`ConfigLoader`].
#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    /// Explicit TOML file; it must exist.
    pub config_path: Option<PathBuf>,
    /// Explicit `.env` file; a missing file is not an error.
    pub env_file: Option<PathBuf>,
    /// Skip `.env` loading entirely.
    pub skip_env_file: bool,
}

/// Resolves [`Config`] from the environment, a TOML file and defaults.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

/// A loaded configuration plus the warnings raised while loading it.
#[derive(Debug)]
pub struct ConfigLoad {
    /// Resolved configuration.
    pub config: Config,
    /// Non-fatal problems.
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    /// Loader with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader with explicit options.
    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    /// Reads configuration from `path` instead of the default locations.
    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    /// Reads `.env` values from `path` instead of `./.env`.
    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Does not read any `.env` file.
    pub fn without_env_file(mut self) -> Self {
        self.options.skip_env_file = true;
        self
    }

    /// Loads configuration from the process environment.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file()?;
        self.load_with_env(EnvConfig::gather(), env_file_loaded)
    }

    /// Loads configuration using already gathered environment values.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
        env_file_loaded: bool,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        let (config, warnings) =
            compose_config(file_config, env, config_path, env_file_loaded)?;
        Ok(ConfigLoad { config, warnings })
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        if self.options.skip_env_file {
            return Ok(false);
        }

        let loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true),
            None => dotenvy::dotenv().map(|_| true),
        };

        match loaded {
            Ok(loaded) => Ok(loaded),
            Err(dotenvy::Error::Io(_)) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let (path, explicit) = match (&self.options.config_path, &env.config_path)
        {
            (Some(path), _) => (Some(path.clone()), true),
            (None, Some(path)) => (Some(path.clone()), true),
            (None, None) => (
                DEFAULT_CONFIG_LOCATIONS
                    .iter()
                    .find(|candidate| candidate.exists())
                    .cloned(),
                false,
            ),
        };

        let Some(path) = path else {
            return Ok((None, None));
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None));
        }

        let contents = fs::read_to_string(&path).map_err(|source| {
            ConfigLoadError::Io {
                path: path.clone(),
                source,
            }
        })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|source| {
                ConfigLoadError::Parse {
                    path: path.clone(),
                    source,
                }
            })?;

        Ok((Some(file_config), Some(path)))
    }
}

fn compose_config(
    file_config: Option<FileConfig>,
    env: EnvConfig,
    config_path: Option<PathBuf>,
    env_file_loaded: bool,
) -> Result<(Config, ConfigWarnings), ConfigLoadError> {
    let mut warnings = ConfigWarnings::default();

    if file_config.is_none() {
        warnings.push_with_hint(
            "No koi.toml detected; using environment variables and defaults",
            "Create koi.toml or set KOI_CONFIG_PATH to customise the proxy",
        );
    }

    let FileConfig {
        server: file_server,
        upstream: file_upstream,
    } = file_config.unwrap_or_default();

    let server = ServerConfig {
        host: env
            .server_host
            .or(file_server.host)
            .unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
        port: env
            .server_port
            .or(file_server.port)
            .unwrap_or(DEFAULT_SERVER_PORT),
    };

    let raw_endpoint = env
        .tap_endpoint
        .or(file_upstream.endpoint)
        .unwrap_or_else(|| DEFAULT_TAP_ENDPOINT.to_string());
    let endpoint = parse_endpoint(&raw_endpoint)?;

    let timeout_secs = match env.upstream_timeout_secs.or(file_upstream.timeout_secs)
    {
        Some(0) => {
            warnings.push_with_hint(
                "Upstream timeout of 0 seconds ignored",
                format!("Using the default of {DEFAULT_UPSTREAM_TIMEOUT_SECS} seconds"),
            );
            DEFAULT_UPSTREAM_TIMEOUT_SECS
        }
        Some(secs) => secs,
        None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
    };

    let config = Config {
        server,
        upstream: UpstreamConfig {
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
        },
        metadata: ConfigMetadata {
            config_path,
            env_file_loaded,
        },
    };

    Ok((config, warnings))
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigLoadError> {
    let url = Url::parse(raw.trim()).map_err(|source| {
        ConfigLoadError::InvalidEndpoint {
            value: raw.to_string(),
            source,
        }
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigLoadError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}

/// Fatal configuration errors.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// An explicitly requested file does not exist.
    #[error("configuration file missing: {path}")]
    MissingConfig {
        /// Requested path.
        path: PathBuf,
    },
    /// The file exists but could not be read.
    #[error("failed to read configuration {path}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for [`FileConfig`].
    #[error("failed to parse configuration {path}")]
    Parse {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: toml::de::Error,
    },
    /// The TAP endpoint is not a URL.
    #[error("invalid TAP endpoint '{value}'")]
    InvalidEndpoint {
        /// Offending value.
        value: String,
        /// Underlying error.
        #[source]
        source: url::ParseError,
    },
    /// The TAP endpoint is not http(s).
    #[error("unsupported TAP endpoint scheme '{scheme}'")]
    UnsupportedScheme {
        /// Offending scheme.
        scheme: String,
    },
    /// The `.env` file could not be parsed.
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_apply_without_sources() {
        let (config, warnings) = compose_config(
            None,
            EnvConfig::default(),
            None,
            false,
        )
        .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.upstream.endpoint.as_str(), DEFAULT_TAP_ENDPOINT);
        assert_eq!(config.upstream.timeout, Duration::from_secs(30));
        assert_eq!(warnings.items.len(), 1);
    }

    #[test]
    fn file_values_fill_in_after_environment() {
        let file = write_config(
            r#"
[server]
host = "127.0.0.1"
port = 8080

[upstream]
endpoint = "http://localhost:9999/TAP/sync"
timeout_secs = 5
"#,
        );
        let env = EnvConfig {
            server_port: Some(4000),
            ..EnvConfig::default()
        };

        let ConfigLoad { config, warnings } = ConfigLoader::new()
            .with_config_path(file.path())
            .load_with_env(env, false)
            .unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4000);
        assert_eq!(
            config.upstream.endpoint.as_str(),
            "http://localhost:9999/TAP/sync"
        );
        assert_eq!(config.upstream.timeout, Duration::from_secs(5));
        assert_eq!(config.metadata.config_path.as_deref(), Some(file.path()));
        assert!(warnings.is_empty());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = ConfigLoader::new()
            .with_config_path(&missing)
            .load_with_env(EnvConfig::default(), false)
            .unwrap_err();
        assert!(matches!(err, ConfigLoadError::MissingConfig { .. }));
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let env = EnvConfig {
            tap_endpoint: Some("ftp://archive.example/tap".into()),
            ..EnvConfig::default()
        };
        let err = compose_config(None, env, None, false).unwrap_err();
        assert!(matches!(err, ConfigLoadError::UnsupportedScheme { .. }));
    }

    #[test]
    fn zero_timeout_falls_back_with_warning() {
        let env = EnvConfig {
            upstream_timeout_secs: Some(0),
            ..EnvConfig::default()
        };
        let (config, warnings) = compose_config(
            Some(FileConfig::default()),
            env,
            None,
            false,
        )
        .unwrap();
        assert_eq!(config.upstream.timeout, Duration::from_secs(30));
        assert_eq!(warnings.items.len(), 1);
    }
}
