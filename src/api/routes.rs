use std::net::SocketAddr;

use axum::{
    Router,
    body::Bytes,
    extract::{ConnectInfo, State, rejection::BytesRejection},
    http::{HeaderMap, Method, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::any,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::AppState;
use crate::api::models::{CrawlRequest, NormalizedResult};
use crate::api::response;
use crate::crawl_api;
use crate::error::{AppError, Result};
use crate::normalize::normalize_results;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        // Every method lands here so the 405 carries a JSON body.
        .route("/crawl", any(crawl_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn crawl_handler(
    State(state): State<AppState>,
    ConnectInfo(remote_addr): ConnectInfo<SocketAddr>,
    method: Method,
    headers: HeaderMap,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Response {
    match handle_crawl(&state, remote_addr, &method, &headers, &body).await {
        Ok(results) => {
            info!(status = 200, %remote_addr, results = results.len(), "Crawl completed");
            response::success(results).into_response()
        }
        Err(err) => {
            warn!(
                status = err.status().as_u16(),
                kind = err.kind(),
                %remote_addr,
                error = %err,
                "Crawl request failed"
            );
            err.into_response()
        }
    }
}

async fn handle_crawl(
    state: &AppState,
    remote_addr: SocketAddr,
    method: &Method,
    headers: &HeaderMap,
    body: &std::result::Result<Bytes, BytesRejection>,
) -> Result<Vec<NormalizedResult>> {
    if *method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    if !is_json_content_type(headers) {
        return Err(AppError::InvalidContentType);
    }

    // Unreadable or oversized bodies (past the 2 MB default limit) never decode.
    let body = body
        .as_ref()
        .map_err(|rejection| AppError::InvalidJson(rejection.body_text()))?;
    let request: CrawlRequest =
        serde_json::from_slice(body).map_err(|e| AppError::InvalidJson(e.to_string()))?;

    info!(%remote_addr, urls = ?request.urls, "Request to crawl");

    let crawled = crawl_api::crawl(&state.client, &state.config.crawl_endpoint, &request).await?;
    Ok(normalize_results(crawled.results))
}

/// Only the bare media type is accepted, no parameters.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .is_some_and(|value| value.as_bytes() == b"application/json")
}
