// src/extract.rs
//! Inline tag discovery: finds `[[tag name]]` markers in document text.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Non-greedy, so `[[a]][[b]]` matches twice instead of swallowing `]][[`.
const TAG_PATTERN: &str = r"\[\[.*?\]\]";

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TAG_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));

/// Strips the `[[` / `]]` delimiters and surrounding whitespace.
/// `raw` must be a full match of [`TAG_PATTERN`], so it is at least 4 bytes.
fn clean_tag(raw: &str) -> &str {
    raw[2..raw.len() - 2].trim()
}

/// Extracts the deduplicated set of tag names from document text.
///
/// Names are case-sensitive and whitespace-trimmed; an empty name
/// (`[[ ]]`) is kept as the empty string. An unterminated `[[` never
/// matches. The `BTreeSet` gives callers a stable iteration order, but
/// the order carries no meaning.
#[must_use]
pub fn extract_tags(content: &str) -> BTreeSet<String> {
    TAG_RE
        .find_iter(content)
        .map(|m| clean_tag(m.as_str()).to_string())
        .collect()
}
