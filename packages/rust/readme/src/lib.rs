//! Per-directory readme generation for the Typesharp source tree.
//!
//! For every top-level directory under the source root, collects the
//! descriptions of its subdirectories and writes a generated `Readme.md`
//! headed by the directory's entry in the description map.

pub mod collect;
pub mod compose;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{info, instrument};

use typesharp_scripts_shared::{
    DescriptionEntry, DescriptionMap, Result, ScriptsConfig, load_description_map,
};

pub use collect::{collect_descriptions, entry_from_fragment, list_subdirectories};
pub use compose::{GENERATED_MARKER, capitalize, compose_readme, entry_url, write_readme};

// ---------------------------------------------------------------------------
// Progress reporting
// ---------------------------------------------------------------------------

/// Trait for reporting readme generation progress to the caller.
pub trait ProgressReporter: Send + Sync {
    /// A top-level directory is about to be processed.
    fn directory_started(&self, name: &str, current: usize, total: usize);
    /// All readmes have been written.
    fn done(&self, result: &GenerateResult);
}

/// No-op reporter for tests and non-interactive use.
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn directory_started(&self, _name: &str, _current: usize, _total: usize) {}
    fn done(&self, _result: &GenerateResult) {}
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// One written readme.
#[derive(Debug, Clone)]
pub struct GeneratedReadme {
    /// Top-level directory name.
    pub name: String,
    /// Path of the written file.
    pub path: PathBuf,
    /// Entries listed in the file, in listing order.
    pub entries: Vec<DescriptionEntry>,
}

/// Outcome of a full generation run.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub readmes: Vec<GeneratedReadme>,
    pub elapsed: Duration,
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Generate a readme for every top-level directory of the source root.
///
/// The description map is loaded once; a missing map means every header
/// uses the default description.
#[instrument(skip_all, fields(root = %config.root.display()))]
pub async fn generate_readmes(
    config: &ScriptsConfig,
    reporter: &dyn ProgressReporter,
) -> Result<GenerateResult> {
    let start = Instant::now();
    let descriptions = load_description_map(&config.descriptions_path())?;
    let source = config.source_path();

    info!(
        source = %source.display(),
        mapped = descriptions.len(),
        "generating readmes"
    );

    let dirs = list_subdirectories(&source).await?;
    let total = dirs.len();
    let mut readmes = Vec::with_capacity(total);

    for (i, (name, path)) in dirs.into_iter().enumerate() {
        reporter.directory_started(&name, i + 1, total);
        info!(%name, "generating readme");
        readmes.push(generate_one(config, &descriptions, name, path).await?);
    }

    let result = GenerateResult {
        readmes,
        elapsed: start.elapsed(),
    };
    info!(count = result.readmes.len(), "readme generation complete");
    reporter.done(&result);

    Ok(result)
}

async fn generate_one(
    config: &ScriptsConfig,
    descriptions: &DescriptionMap,
    name: String,
    path: PathBuf,
) -> Result<GeneratedReadme> {
    let entries = collect_descriptions(&path, &config.readme_name).await?;
    let contents = compose_readme(
        &name,
        descriptions.resolve(&name),
        &entries,
        &config.repository_url,
    );
    let written = write_readme(&path, &config.readme_name, &contents).await?;

    Ok(GeneratedReadme {
        name,
        path: written,
        entries,
    })
}
