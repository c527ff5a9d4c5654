//! HTTP route handlers.

pub mod health;
pub mod keywords;
pub mod metrics;
pub mod simplify;

use serde_json::{Map, Value};

/// Body shared by the text endpoints: a JSON object with an optional `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextPayload {
    pub text: String,
}

impl TextPayload {
    /// Reads `text` from a JSON object. A missing, `null` or non-string value is
    /// read as the empty string; every other key is ignored.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let text = match object.get("text") {
            Some(Value::String(text)) => text.clone(),
            _ => String::new(),
        };
        Self { text }
    }
}
