//! Token document rendering.

use serde::Serialize;

use typesharp_scripts_shared::{Result, ScriptError, TokenRecord};

/// Header line of the text document.
pub const TEXT_HEADER: &str = "Keywords:";

/// Output format of the token document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `Keywords:` followed by ` - Name: "value"` lines.
    #[default]
    Text,
    /// Pretty-printed `{"keywords": [...]}`.
    Json,
}

impl DocumentFormat {
    /// Render `records` in this format.
    pub fn render(self, records: &[TokenRecord]) -> Result<String> {
        match self {
            Self::Text => Ok(render_text(records)),
            Self::Json => render_json(records),
        }
    }
}

/// Render the text document. An empty slice yields the header alone.
pub fn render_text(records: &[TokenRecord]) -> String {
    let mut out = String::from(TEXT_HEADER);
    for record in records {
        out.push_str(&format!("\n - {}: \"{}\"", record.name, record.value));
    }
    out
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    keywords: &'a [TokenRecord],
}

/// Render the JSON document.
pub fn render_json(records: &[TokenRecord]) -> Result<String> {
    serde_json::to_string_pretty(&JsonDocument { keywords: records })
        .map_err(|e| ScriptError::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<TokenRecord> {
        vec![
            TokenRecord {
                name: "If".into(),
                value: "if".into(),
            },
            TokenRecord {
                name: "SelfKeyword".into(),
                value: "self".into(),
            },
        ]
    }

    #[test]
    fn render_text_lists_records_in_order() {
        assert_eq!(
            render_text(&records()),
            "Keywords:\n - If: \"if\"\n - SelfKeyword: \"self\""
        );
    }

    #[test]
    fn render_text_empty_is_header_only() {
        assert_eq!(render_text(&[]), "Keywords:");
    }

    #[test]
    fn render_json_wraps_records() {
        let json = render_json(&records()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["keywords"][1]["name"], "SelfKeyword");
        assert_eq!(parsed["keywords"][1]["value"], "self");
    }

    #[test]
    fn default_format_is_text() {
        let out = DocumentFormat::default().render(&records()).unwrap();
        assert!(out.starts_with("Keywords:\n"));
    }
}
