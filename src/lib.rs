pub mod api;
pub mod config;
pub mod crawl_api;
pub mod error;
pub mod normalize;

use std::sync::Arc;
use config::Config;
use error::Result;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let client = crawl_api::build_client(&config)?;
        Ok(AppState {
            config: Arc::new(config),
            client,
        })
    }
}
