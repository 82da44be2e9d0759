//! Description collection from subdirectory fragment documents.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use typesharp_scripts_shared::{DescriptionEntry, Result, ScriptError, read_optional};

/// Collect one [`DescriptionEntry`] per immediate subdirectory of `dir`.
///
/// A missing `dir` yields an empty list. Fragment reads run as separate
/// tasks, but entries come back in directory-listing order.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub async fn collect_descriptions(
    dir: &Path,
    fragment_name: &str,
) -> Result<Vec<DescriptionEntry>> {
    let subdirs = match list_subdirectories(dir).await {
        Ok(subdirs) => subdirs,
        Err(ScriptError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            debug!("directory does not exist, no descriptions");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    let mut handles = Vec::with_capacity(subdirs.len());
    for (name, path) in subdirs {
        let fragment = path.join(fragment_name);
        handles.push(tokio::spawn(async move {
            let content = read_optional(&fragment).await?;
            Ok::<_, ScriptError>(entry_from_fragment(name, content.as_deref()))
        }));
    }

    // Awaiting in spawn order keeps listing order.
    let mut entries = Vec::with_capacity(handles.len());
    for handle in handles {
        let entry = handle
            .await
            .map_err(|e| ScriptError::Task(e.to_string()))??;
        entries.push(entry);
    }

    debug!(count = entries.len(), "descriptions collected");
    Ok(entries)
}

/// List `(name, path)` for every immediate child directory, in listing order.
pub async fn list_subdirectories(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut read_dir = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| ScriptError::io(dir, e))?;

    let mut subdirs = Vec::new();
    while let Some(entry) = read_dir
        .next_entry()
        .await
        .map_err(|e| ScriptError::io(dir, e))?
    {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| ScriptError::io(&path, e))?;
        if file_type.is_dir() {
            subdirs.push((entry.file_name().to_string_lossy().into_owned(), path));
        }
    }

    Ok(subdirs)
}

/// Build the entry for one subdirectory from its fragment text, if any.
///
/// The description is the second line; blank or missing falls back.
pub fn entry_from_fragment(name: String, fragment: Option<&str>) -> DescriptionEntry {
    match fragment.and_then(|text| text.lines().nth(1)) {
        Some(line) if !line.trim().is_empty() => DescriptionEntry {
            name,
            description: line.to_string(),
        },
        _ => DescriptionEntry::fallback(name),
    }
}
