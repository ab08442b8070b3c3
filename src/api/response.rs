use serde::Serialize;
use axum::Json;
use axum::http::StatusCode;

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub error: String,
    pub detail: String,
}

/// Successful bodies are sent bare, without an envelope.
pub fn success<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn error(status: StatusCode, kind: &str, detail: String) -> (StatusCode, Json<ErrorPayload>) {
    (
        status,
        Json(ErrorPayload {
            error: kind.to_string(),
            detail,
        }),
    )
}
