//! Readme composition and writing.

use std::path::{Path, PathBuf};

use tracing::debug;

use typesharp_scripts_shared::{DescriptionEntry, Result, ScriptError};

/// First line of every generated readme.
pub const GENERATED_MARKER: &str = "<!-- This file was auto generated by Typesharp. -->";

/// Compose the readme for top-level directory `name`.
///
/// ```text
/// <!-- This file was auto generated by Typesharp. -->
/// # Parser - Turns text into trees.
///  - **[lexer](<repository_url>/src/parser/lexer)** - Splits source into tokens.
/// ```
pub fn compose_readme(
    name: &str,
    description: &str,
    entries: &[DescriptionEntry],
    repository_url: &str,
) -> String {
    let mut out = format!("{GENERATED_MARKER}\n# {} - {description}", capitalize(name));
    for entry in entries {
        out.push_str(&format!(
            "\n - **[{}]({})** - {}",
            entry.name,
            entry_url(repository_url, name, &entry.name),
            entry.description
        ));
    }
    out
}

/// Link to `src/<dir>/<entry>` in the repository tree.
pub fn entry_url(repository_url: &str, dir: &str, entry: &str) -> String {
    format!("{}/src/{dir}/{entry}", repository_url.trim_end_matches('/'))
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) => {
            let upper: String = c.to_uppercase().collect();
            format!("{upper}{}", chars.as_str())
        }
        None => String::new(),
    }
}

/// Write `contents` to `<dir>/<file_name>`, replacing whatever is there.
pub async fn write_readme(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(file_name);
    tokio::fs::write(&path, contents)
        .await
        .map_err(|e| ScriptError::io(&path, e))?;
    debug!(path = %path.display(), bytes = contents.len(), "readme written");
    Ok(path)
}
