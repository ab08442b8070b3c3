use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::Serialize;
use tracing::debug;

use crate::api::models::{CrawlRequest, CrawlResponse};
use crate::config::Config;
use crate::error::{AppError, Result};

/// Builds the client shared by every request. Connections to the crawl service are pooled.
pub fn build_client(config: &Config) -> Result<Client> {
    let mut builder = ClientBuilder::new();
    if let Some(timeout) = config.crawl_timeout {
        builder = builder.timeout(timeout);
    }

    builder
        .build()
        .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))
}

/// Serializes a value we constructed ourselves. Failure here is a bug, not bad input.
pub fn encode_json<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).expect("serializing an owned request type cannot fail")
}

/// Forwards the request to the crawl service and decodes its reply.
pub async fn crawl(client: &Client, endpoint: &str, request: &CrawlRequest) -> Result<CrawlResponse> {
    debug!(endpoint, urls = request.urls.len(), "Calling crawl api");

    let res = client
        .post(endpoint)
        .header(CONTENT_TYPE, "application/json")
        .body(encode_json(request))
        .send()
        .await?;

    let status = res.status();
    if status != StatusCode::OK {
        return Err(AppError::BadGateway(format!(
            "crawl api responded with status {}",
            status.as_u16()
        )));
    }

    let body = res.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "Crawl api body did not decode");
        AppError::BadGateway("invalid json received from crawl api".to_string())
    })
}
