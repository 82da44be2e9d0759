//! Reserved-word dump for the Typesharp compiler.
//!
//! Reads the `KeyWord` enumeration source, normalizes it, extracts one
//! [`TokenRecord`] per variant, and writes a token document.
//!
//! ```text
//! keyword.rs ──► normalize ──► enum_body ──► tokenize ──► render ──► <output>
//! ```

pub mod document;
pub mod extract;
pub mod normalize;

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use typesharp_scripts_shared::{Result, ScriptError, ScriptsConfig, TokenRecord};

pub use document::{DocumentFormat, render_json, render_text};
pub use extract::{ENUM_MARKER, enum_body, extract_keywords, tokenize};
pub use normalize::normalize;

/// Outcome of a successful keyword dump.
#[derive(Debug, Clone)]
pub struct DumpResult {
    /// Where the document was written.
    pub output_path: PathBuf,
    /// Records in source order.
    pub records: Vec<TokenRecord>,
}

/// Build the token document from raw enumeration source.
///
/// Fails with [`ScriptError::MarkerNotFound`] before anything is rendered.
pub fn keywords_document(raw: &str, format: DocumentFormat) -> Result<(Vec<TokenRecord>, String)> {
    let normalized = normalize(raw);
    let records = extract_keywords(&normalized)?;
    let document = format.render(&records)?;
    Ok((records, document))
}

/// Run the keyword pipeline: read the configured source, write `output`
/// (resolved against the project root).
#[instrument(skip_all, fields(output = %output.display()))]
pub fn dump_keywords(
    config: &ScriptsConfig,
    output: &Path,
    format: DocumentFormat,
) -> Result<DumpResult> {
    let source_path = config.keyword_path();
    let raw = std::fs::read_to_string(&source_path)
        .map_err(|e| ScriptError::io(&source_path, e))?;

    let (records, document) = keywords_document(&raw, format)?;

    let output_path = config.resolve(output);
    std::fs::write(&output_path, document).map_err(|e| ScriptError::io(&output_path, e))?;

    info!(
        count = records.len(),
        path = %output_path.display(),
        "token document written"
    );

    Ok(DumpResult {
        output_path,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const KEYWORD_SOURCE: &str = r#"use std::{ fmt, error };

// These keywords are reserved.
#[derive(Debug)]
pub enum KeyWord {
     // Await, used for synchronizing load.
     Await,

     // For loops, eg: for let i in blah {}
     For,

     // Used in if...else blocks.
     Else,

     SelfKeyword,

     Implements,
}

impl KeyWord {
     pub fn as_str(&self) -> &'static str {
          return "Not implemented";
     }
}
"#;

    fn project_with_source(source: &str) -> TempDir {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(typesharp_scripts_shared::DEFAULT_KEYWORD_FILE);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, source).unwrap();
        tmp
    }

    #[test]
    fn keywords_document_renders_source_enum() {
        let (records, doc) = keywords_document(KEYWORD_SOURCE, DocumentFormat::Text).unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(
            doc,
            "Keywords:\n - Await: \"await\"\n - For: \"for\"\n - Else: \"else\"\n - SelfKeyword: \"self\"\n - Implements: \"implements\""
        );
    }

    #[test]
    fn keywords_document_block_comments_with_urls_and_crlf() {
        let lf = "pub enum KeyWord {\n     Delete /* see https://example.com */,\n     Else,\n}\n";
        let crlf = "pub enum KeyWord {\r\n     Delete /* note */,\r\n     Else, // else\r\n}\r\n";

        for source in [lf, crlf] {
            let (records, _) = keywords_document(source, DocumentFormat::Text).unwrap();
            let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
            let values: Vec<_> = records.iter().map(|r| r.value.as_str()).collect();
            assert_eq!(names, ["Delete", "Else"]);
            assert_eq!(values, ["delete", "else"]);
        }
    }

    #[test]
    fn keywords_document_missing_marker_fails() {
        let result = keywords_document("pub enum Token {\n     Ident,\n}", DocumentFormat::Text);
        assert!(matches!(result, Err(ScriptError::MarkerNotFound { .. })));
    }

    #[test]
    fn dump_keywords_writes_relative_output() {
        let tmp = project_with_source(KEYWORD_SOURCE);
        let config = ScriptsConfig::new(tmp.path());

        let result = dump_keywords(&config, Path::new("tokens.yml"), DocumentFormat::Text).unwrap();

        assert_eq!(result.output_path, tmp.path().join("tokens.yml"));
        let written = std::fs::read_to_string(&result.output_path).unwrap();
        assert!(written.starts_with("Keywords:\n - Await: \"await\""));
    }

    #[test]
    fn dump_keywords_is_byte_identical_across_runs() {
        let tmp = project_with_source(KEYWORD_SOURCE);
        let config = ScriptsConfig::new(tmp.path());

        dump_keywords(&config, Path::new("tokens.yml"), DocumentFormat::Text).unwrap();
        let first = std::fs::read(tmp.path().join("tokens.yml")).unwrap();
        dump_keywords(&config, Path::new("tokens.yml"), DocumentFormat::Text).unwrap();
        let second = std::fs::read(tmp.path().join("tokens.yml")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn dump_keywords_missing_marker_writes_nothing() {
        let tmp = project_with_source("pub enum Token {\n     Ident,\n}\n");
        let config = ScriptsConfig::new(tmp.path());

        let result = dump_keywords(&config, Path::new("tokens.yml"), DocumentFormat::Text);

        assert!(matches!(result, Err(ScriptError::MarkerNotFound { .. })));
        assert!(!tmp.path().join("tokens.yml").exists());
    }

    #[test]
    fn dump_keywords_missing_source_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let config = ScriptsConfig::new(tmp.path());

        let result = dump_keywords(&config, Path::new("tokens.yml"), DocumentFormat::Text);
        assert!(matches!(result, Err(ScriptError::Io { .. })));
    }

    #[test]
    fn dump_keywords_json_format() {
        let tmp = project_with_source(KEYWORD_SOURCE);
        let config = ScriptsConfig::new(tmp.path());

        dump_keywords(&config, Path::new("tokens.json"), DocumentFormat::Json).unwrap();

        let written = std::fs::read_to_string(tmp.path().join("tokens.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["keywords"].as_array().unwrap().len(), 5);
        assert_eq!(parsed["keywords"][3]["value"], "self");
    }
}
