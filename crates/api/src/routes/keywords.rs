//! Keyword extraction endpoint.

use axum::Json;
use serde::Serialize;
use simplifier::{DEFAULT_KEYWORD_LIMIT, extract_keywords};

use super::TextPayload;
use crate::extract::JsonObject;

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

/// POST /keywords/: the longest distinct words of the text, longest first.
#[tracing::instrument(skip_all, fields(text_len = tracing::field::Empty))]
pub async fn keywords(JsonObject(object): JsonObject) -> Json<KeywordsResponse> {
    let request = TextPayload::from_object(&object);
    tracing::Span::current().record("text_len", request.text.len());

    metrics::counter!("keyword_requests_total").increment(1);

    let keywords = extract_keywords(&request.text, DEFAULT_KEYWORD_LIMIT);
    tracing::debug!(count = keywords.len(), "extracted keywords");

    Json(KeywordsResponse { keywords })
}
