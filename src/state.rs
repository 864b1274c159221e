// src/state.rs
use std::sync::Arc;

use reqwest::Client;

use crate::config::Config;

pub type SharedState = Arc<AppState>;

/// Read-only handler state. Holds no tokens or replies between requests.
pub struct AppState {
    pub config: Config,
    pub http: Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;
        Ok(Self { config, http })
    }
}
