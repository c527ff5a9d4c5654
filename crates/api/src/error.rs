//! API error types with HTTP response mapping.

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::error::Category;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The request declared a content type other than JSON.
    UnsupportedMediaType(String),
    /// The request body could not be read.
    Body(BytesRejection),
    /// The body was not valid JSON, or not a JSON object.
    InvalidJson(serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::UnsupportedMediaType(content_type) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                format!("Expected a JSON `Content-Type`, got `{content_type}`"),
            ),
            ApiError::Body(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::InvalidJson(err) => json_error_to_response(&err),
        };

        tracing::debug!(status = status.as_u16(), error = %message, "rejected request body");
        metrics::counter!("rejected_requests_total", "status" => status.as_str().to_owned())
            .increment(1);

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn json_error_to_response(err: &serde_json::Error) -> (StatusCode, String) {
    match err.classify() {
        Category::Data => (
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("Failed to deserialize the JSON body: {err}"),
        ),
        _ => (
            StatusCode::BAD_REQUEST,
            format!("Failed to parse the request body as JSON: {err}"),
        ),
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Body(rejection)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidJson(err)
    }
}
