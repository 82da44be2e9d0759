//! Soft-missing file reads.
//!
//! A missing file is "no data", not an error: both helpers return `Ok(None)`
//! on `NotFound` and propagate every other I/O failure.
//!
//! [`read_optional`] reads fragment documents and decodes lossily, so a stray
//! invalid byte never aborts a run. The blocking variant reads config files
//! and stays strict.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, ScriptError};

/// Read a text file, returning `None` if it does not exist.
///
/// Invalid UTF-8 sequences are replaced with `U+FFFD`.
pub async fn read_optional(path: &Path) -> Result<Option<String>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::trace!(?path, "optional file not found");
            Ok(None)
        }
        Err(e) => Err(ScriptError::io(path, e)),
    }
}

/// Blocking variant of [`read_optional`] for the synchronous config loaders.
pub fn read_optional_blocking(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::trace!(?path, "optional file not found");
            Ok(None)
        }
        Err(e) => Err(ScriptError::io(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn read_optional_missing_is_none() {
        let tmp = TempDir::new().unwrap();
        let result = read_optional(&tmp.path().join("Readme.md")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn read_optional_existing_is_some() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Readme.md");
        std::fs::write(&path, "# Lexer\nSplits source into tokens.").unwrap();

        let result = read_optional(&path).await.unwrap();
        assert_eq!(result.as_deref(), Some("# Lexer\nSplits source into tokens."));
    }

    #[tokio::test]
    async fn read_optional_decodes_invalid_utf8_lossily() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Readme.md");
        std::fs::write(&path, b"# Lexer\nSplits \xff tokens.").unwrap();

        let result = read_optional(&path).await.unwrap();
        assert_eq!(result.as_deref(), Some("# Lexer\nSplits \u{FFFD} tokens."));
    }

    #[tokio::test]
    async fn read_optional_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = read_optional(tmp.path()).await;
        assert!(matches!(result, Err(ScriptError::Io { .. })));
    }

    #[test]
    fn read_optional_blocking_missing_is_none() {
        let tmp = TempDir::new().unwrap();
        let result = read_optional_blocking(&tmp.path().join("descriptions.json")).unwrap();
        assert!(result.is_none());
    }
}
