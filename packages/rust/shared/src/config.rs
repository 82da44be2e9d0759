//! Configuration for the Typesharp scripts.
//!
//! Every path is resolved against an explicit project root carried in
//! [`ScriptsConfig`]. An optional `scripts/scripts.toml` under the root
//! overrides the defaults; CLI flags override the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, ScriptError};
use crate::fs::read_optional_blocking;
use crate::types::DescriptionMap;

/// Enumeration source file, relative to the project root.
pub const DEFAULT_KEYWORD_FILE: &str = "src/compiler/typesharp_ast/keyword.rs";

/// Source tree whose top-level directories get a generated readme.
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Optional description map, relative to the project root.
pub const DEFAULT_DESCRIPTIONS_FILE: &str = "scripts/descriptions.json";

/// Fragment document name, both read from subdirectories and written to top-level ones.
pub const DEFAULT_README_NAME: &str = "Readme.md";

/// Repository tree URL that generated links point into.
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/TypeSharp/Typesharp/tree/master";

/// Optional settings file, relative to the project root.
const FILE_CONFIG_PATH: &str = "scripts/scripts.toml";

// ---------------------------------------------------------------------------
// File config (matching scripts.toml schema)
// ---------------------------------------------------------------------------

/// Overrides read from `scripts/scripts.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub keyword_file: Option<String>,

    #[serde(default)]
    pub source_dir: Option<String>,

    #[serde(default)]
    pub descriptions_file: Option<String>,

    #[serde(default)]
    pub readme_name: Option<String>,

    /// Base of the generated links, without trailing slash.
    #[serde(default)]
    pub repository_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Runtime config
// ---------------------------------------------------------------------------

/// Runtime configuration threaded into both pipelines.
#[derive(Debug, Clone)]
pub struct ScriptsConfig {
    /// Project root every relative path resolves against.
    pub root: PathBuf,
    pub keyword_file: PathBuf,
    pub source_dir: PathBuf,
    pub descriptions_file: PathBuf,
    pub readme_name: String,
    pub repository_url: String,
}

impl ScriptsConfig {
    /// Defaults rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            keyword_file: PathBuf::from(DEFAULT_KEYWORD_FILE),
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            descriptions_file: PathBuf::from(DEFAULT_DESCRIPTIONS_FILE),
            readme_name: DEFAULT_README_NAME.to_string(),
            repository_url: DEFAULT_REPOSITORY_URL.to_string(),
        }
    }

    /// Defaults rooted at `root`, merged with `scripts/scripts.toml` if present.
    pub fn load(root: impl Into<PathBuf>) -> Result<Self> {
        let mut config = Self::new(root);
        if let Some(file) = load_file_config(&config.root)? {
            config.apply(file);
        }
        Ok(config)
    }

    /// Apply file overrides on top of the current values.
    pub fn apply(&mut self, file: FileConfig) {
        if let Some(p) = file.keyword_file {
            self.keyword_file = PathBuf::from(p);
        }
        if let Some(p) = file.source_dir {
            self.source_dir = PathBuf::from(p);
        }
        if let Some(p) = file.descriptions_file {
            self.descriptions_file = PathBuf::from(p);
        }
        if let Some(name) = file.readme_name {
            self.readme_name = name;
        }
        if let Some(url) = file.repository_url {
            self.repository_url = url.trim_end_matches('/').to_string();
        }
    }

    /// Resolve a path against the project root. Absolute paths are kept as-is.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    pub fn keyword_path(&self) -> PathBuf {
        self.resolve(&self.keyword_file)
    }

    pub fn source_path(&self) -> PathBuf {
        self.resolve(&self.source_dir)
    }

    pub fn descriptions_path(&self) -> PathBuf {
        self.resolve(&self.descriptions_file)
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load `scripts/scripts.toml` under `root`. Returns `None` if it does not exist.
pub fn load_file_config(root: &Path) -> Result<Option<FileConfig>> {
    let path = root.join(FILE_CONFIG_PATH);
    let Some(content) = read_optional_blocking(&path)? else {
        tracing::debug!(?path, "scripts config not found, using defaults");
        return Ok(None);
    };

    toml::from_str(&content)
        .map(Some)
        .map_err(|e| ScriptError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Load the description map. A missing file yields an empty map.
pub fn load_description_map(path: &Path) -> Result<DescriptionMap> {
    match read_optional_blocking(path)? {
        Some(content) => parse_description_map(&content)
            .map_err(|e| ScriptError::config(format!("failed to parse {}: {e}", path.display()))),
        None => {
            tracing::debug!(?path, "description map not found, using defaults");
            Ok(DescriptionMap::default())
        }
    }
}

/// Parse a flat JSON object of directory name → description.
pub fn parse_description_map(json: &str) -> std::result::Result<DescriptionMap, serde_json::Error> {
    serde_json::from_str(json)
}
