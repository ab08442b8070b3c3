use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::response;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("content type must be application/json")]
    InvalidContentType,

    #[error("invalid json: {0}")]
    InvalidJson(String),

    #[error("bad gateway: {0}")]
    BadGateway(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Machine-readable kind sent back as the `error` field.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::MethodNotAllowed => "method-not-allowed",
            AppError::InvalidContentType => "invalid-content-type",
            AppError::InvalidJson(_) => "invalid-json",
            AppError::BadGateway(_) => "bad-gateway",
            AppError::Config(_) => "internal-error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InvalidContentType | AppError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            AppError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::MethodNotAllowed => String::new(),
            AppError::InvalidContentType => self.to_string(),
            AppError::InvalidJson(msg) | AppError::BadGateway(msg) | AppError::Config(msg) => {
                msg.clone()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        response::error(self.status(), self.kind(), self.detail()).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::BadGateway(format!("crawl api request failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
