//! HTTP client for the archive proxy.

pub mod client;
pub mod error;

pub use client::{CatalogClient, CatalogSource, DEFAULT_PROXY_ENDPOINT, parse_rows};
pub use error::{ErrorKind, FetchError};
