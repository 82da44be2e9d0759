//! Source text normalization ahead of keyword extraction.
//!
//! Each pass is a function `&str -> String` applied in sequence. Comment
//! stripping must run before whitespace collapsing: once newlines are gone a
//! `//` comment would swallow everything after it.

use std::sync::LazyLock;

use regex::Regex;

/// Strip end-of-line comments, then collapse whitespace runs.
pub fn normalize(raw: &str) -> String {
    let mut result = strip_comments(raw);
    result = collapse_whitespace(&result);
    result
}

// ---------------------------------------------------------------------------
// Pass 1: Comments
// ---------------------------------------------------------------------------

/// Remove `//` comments and block comments whose `*/` ends the line.
///
/// Both kinds share one pattern so the leftmost comment start wins: a `//`
/// inside a block comment does not cut it short. A comma directly after a
/// block comment is kept. Line ends may be `\n` or `\r\n`.
fn strip_comments(src: &str) -> String {
    static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?mR)//.*$| ?/\*(?s:.*?)\*/(,?)[ \t]*$").expect("valid regex")
    });

    COMMENT_RE.replace_all(src, "$1").to_string()
}

// ---------------------------------------------------------------------------
// Pass 2: Whitespace
// ---------------------------------------------------------------------------

/// Delete every run of two or more whitespace characters. Single spaces stay.
fn collapse_whitespace(src: &str) -> String {
    static WS_RUN_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid regex"));

    WS_RUN_RE.replace_all(src, "").to_string()
}
