//! Pure text operations behind the text simplifier service.
//!
//! This crate has no knowledge of HTTP. It provides:
//! - the simplify contract: a fixed label prepended to the input, with the
//!   original text echoed back for highlighting
//! - keyword extraction over plain text

pub mod keywords;
pub mod simplify;

pub use keywords::{DEFAULT_KEYWORD_LIMIT, MIN_KEYWORD_LEN, extract_keywords};
pub use simplify::{SIMPLIFIED_PREFIX, Simplified, simplify};
