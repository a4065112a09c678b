//! Candidate name extraction.
//!
//! The generator page wraps each suggestion in a bare `<li>` element with no
//! attributes, so a fixed lexical pattern is enough; no HTML parser needed.

use regex::Regex;
use std::sync::LazyLock;

/// A list item whose entire content is 4-12 ASCII letters.
static NAME_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<li>([A-Za-z]{4,12})</li>").unwrap());

/// Extract candidate names from the generator page, in source order, without
/// deduplication. No matches is an empty vec, not an error; the caller
/// decides whether that is fatal.
pub fn extract_names(html: &str) -> Vec<String> {
    NAME_ITEM
        .captures_iter(html)
        .map(|caps| caps[1].to_string())
        .collect()
}
