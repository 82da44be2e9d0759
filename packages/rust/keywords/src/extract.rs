//! Keyword extraction from normalized source text.
//!
//! Two independent stages: [`enum_body`] bounds the enumeration body between
//! the opening marker and the next `}`, and [`tokenize`] turns that body into
//! ordered [`TokenRecord`]s.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use typesharp_scripts_shared::{Result, ScriptError, TokenRecord};

/// Opening marker of the reserved-word enumeration, as it appears after normalization.
pub const ENUM_MARKER: &str = "enum KeyWord {";

/// Closing delimiter of the enumeration body.
const BODY_END: char = '}';

/// Extract token records from normalized text.
pub fn extract_keywords(normalized: &str) -> Result<Vec<TokenRecord>> {
    let body = enum_body(normalized)?;
    let records = tokenize(body);
    debug!(count = records.len(), "extracted keyword records");
    Ok(records)
}

// ---------------------------------------------------------------------------
// Stage 1: marker-bounded substring
// ---------------------------------------------------------------------------

/// Return the text after [`ENUM_MARKER`] up to the next `}`.
///
/// Without a closing brace the body runs to the end of the text.
pub fn enum_body(normalized: &str) -> Result<&str> {
    let (_, rest) = normalized
        .split_once(ENUM_MARKER)
        .ok_or_else(|| ScriptError::marker_not_found(ENUM_MARKER))?;

    Ok(rest.split(BODY_END).next().unwrap_or(rest))
}

// ---------------------------------------------------------------------------
// Stage 2: tokenizer
// ---------------------------------------------------------------------------

/// Split an enumeration body on commas, skipping empty segments.
pub fn tokenize(body: &str) -> Vec<TokenRecord> {
    body.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|name| TokenRecord {
            name: name.to_string(),
            value: display_value(name),
        })
        .collect()
}

/// Lowercase the identifier and drop every `keyword`, case-insensitively.
pub fn display_value(name: &str) -> String {
    static MARKER_WORD_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?i)keyword").expect("valid regex"));

    MARKER_WORD_RE.replace_all(&name.to_lowercase(), "").to_string()
}
