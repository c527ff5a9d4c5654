//! Keyword extraction.
//!
//! Picks out the longest distinct words of a text. Punctuation and symbols
//! are stripped from each word before it is measured, and words of
//! [`MIN_KEYWORD_LEN`] characters or fewer are ignored.

use std::sync::LazyLock;

use regex::Regex;

/// Words must be strictly longer than this many characters.
pub const MIN_KEYWORD_LEN: usize = 4;

/// Number of keywords returned by the HTTP endpoint.
pub const DEFAULT_KEYWORD_LIMIT: usize = 5;

// Anything outside general category Letter and the ASCII digits. Combining
// marks and letter-like numerals are stripped too.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}0-9]").expect("non-word pattern is valid"));

/// Returns up to `limit` distinct keywords from `text`, longest first.
///
/// Words of equal length keep the order in which they first appear.
pub fn extract_keywords(text: &str, limit: usize) -> Vec<String> {
    let mut keywords: Vec<(usize, String)> = Vec::new();

    for token in text.split_whitespace() {
        let word = NON_WORD.replace_all(token, "").into_owned();
        let len = word.chars().count();
        if len <= MIN_KEYWORD_LEN || keywords.iter().any(|(_, seen)| *seen == word) {
            continue;
        }
        keywords.push((len, word));
    }

    // sort_by is stable, so ties stay in first-seen order
    keywords.sort_by(|a, b| b.0.cmp(&a.0));
    keywords.truncate(limit);
    keywords.into_iter().map(|(_, word)| word).collect()
}
