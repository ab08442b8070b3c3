use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use crate::error::{AppError, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_CRAWL_ENDPOINT: &str = "http://crawl4ai:11235/crawl";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    /// Full URL of the upstream crawl service's `/crawl` endpoint.
    pub crawl_endpoint: String,
    /// `None` means the upstream call may wait indefinitely.
    pub crawl_timeout: Option<Duration>,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable source, falling back to defaults
    /// for anything unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let ip = IpAddr::from_str(&host)
            .map_err(|e| AppError::Config(format!("Invalid HOST {:?}: {}", host, e)))?;

        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("Invalid PORT {:?}: {}", port, e)))?,
            None => DEFAULT_PORT,
        };

        let crawl_endpoint =
            lookup("CRAWL_API_ENDPOINT").unwrap_or_else(|| DEFAULT_CRAWL_ENDPOINT.to_string());
        validate_endpoint(&crawl_endpoint)?;

        let crawl_timeout = match lookup("CRAWL_API_TIMEOUT_SECS") {
            Some(secs) => {
                let secs = secs.parse::<u64>().map_err(|e| {
                    AppError::Config(format!("Invalid CRAWL_API_TIMEOUT_SECS {:?}: {}", secs, e))
                })?;
                if secs == 0 {
                    return Err(AppError::Config(
                        "CRAWL_API_TIMEOUT_SECS must be greater than zero".to_string(),
                    ));
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            crawl_endpoint,
            crawl_timeout,
        })
    }
}

fn validate_endpoint(endpoint: &str) -> Result<()> {
    let url = reqwest::Url::parse(endpoint).map_err(|e| {
        AppError::Config(format!("Invalid CRAWL_API_ENDPOINT {:?}: {}", endpoint, e))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AppError::Config(format!(
            "CRAWL_API_ENDPOINT must be http or https, got {:?}",
            other
        ))),
    }
}
