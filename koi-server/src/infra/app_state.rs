use std::{fmt, sync::Arc};

use koi_config::Config;

use crate::upstream::{TapClient, UpstreamError};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tap: Arc<TapClient>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, UpstreamError> {
        let tap = TapClient::new(&config.upstream)?;
        Ok(Self {
            config: Arc::new(config),
            tap: Arc::new(tap),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("upstream", &self.tap.endpoint().as_str())
            .finish_non_exhaustive()
    }
}
