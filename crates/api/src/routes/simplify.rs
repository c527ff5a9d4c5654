//! Text simplification endpoint.

use axum::Json;
use simplifier::Simplified;

use super::TextPayload;
use crate::extract::JsonObject;

/// POST /simplify-text/: prefix the text with the simplified label and echo it back.
#[tracing::instrument(skip_all, fields(text_len = tracing::field::Empty))]
pub async fn simplify_text(JsonObject(object): JsonObject) -> Json<Simplified> {
    let request = TextPayload::from_object(&object);
    tracing::Span::current().record("text_len", request.text.len());

    metrics::counter!("simplify_requests_total").increment(1);

    Json(simplifier::simplify(&request.text))
}
