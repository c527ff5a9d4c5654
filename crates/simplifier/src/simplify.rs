//! The simplify contract.

use serde::Serialize;

/// Label prepended to every input ("this is the simplified text: ").
pub const SIMPLIFIED_PREFIX: &str = "Bu basitleştirilmiş metin: ";

/// Result of simplifying a piece of text.
///
/// Serializes to exactly two string fields, `simplified_text` and
/// `highlighted_original_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Simplified {
    pub simplified_text: String,
    pub highlighted_original_text: String,
}

/// Prepends [`SIMPLIFIED_PREFIX`] to `text` and echoes `text` back unchanged.
pub fn simplify(text: &str) -> Simplified {
    let mut simplified_text = String::with_capacity(SIMPLIFIED_PREFIX.len() + text.len());
    simplified_text.push_str(SIMPLIFIED_PREFIX);
    simplified_text.push_str(text);

    Simplified {
        simplified_text,
        highlighted_original_text: text.to_string(),
    }
}
