//! Request body extraction for the text endpoints.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, header};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// A request body holding a JSON object.
///
/// The body is parsed as JSON when `Content-Type` is a JSON type or missing
/// altogether. Any other declared type is refused with 415.
#[derive(Debug)]
pub struct JsonObject(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(content_type) =
            declared_content_type(req.headers()).filter(|ct| !is_json_content_type(ct))
        {
            return Err(ApiError::UnsupportedMediaType(content_type));
        }

        let body = Bytes::from_request(req, state).await?;
        let object = serde_json::from_slice(&body)?;
        Ok(JsonObject(object))
    }
}

fn declared_content_type(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::CONTENT_TYPE)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}

/// `application/json` or any `application/*+json` type, parameters ignored.
fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}
