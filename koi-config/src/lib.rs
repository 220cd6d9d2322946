//! Configuration for the KOI catalog proxy.
//!
//! Values resolve in this order: explicit overrides from the command line
//! (applied by the caller), environment variables (optionally seeded from a
//! `.env` file), a TOML file, then built-in defaults. Loading never fails on
//! a missing default file; it records a warning instead.

pub mod loader;
pub mod models;
pub mod sources;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions};
pub use models::{
    Config, ConfigMetadata, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_TAP_ENDPOINT, DEFAULT_UPSTREAM_TIMEOUT_SECS, ServerConfig,
    UpstreamConfig,
};
pub use validation::{ConfigWarning, ConfigWarnings};
