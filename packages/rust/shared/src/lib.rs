//! Shared types, error model, and configuration for the Typesharp scripts.
//!
//! This crate is the foundation depended on by the keyword and readme crates.
//! It provides:
//! - [`ScriptError`], the unified error type
//! - Domain types ([`TokenRecord`], [`DescriptionEntry`], [`DescriptionMap`])
//! - Configuration ([`ScriptsConfig`], [`FileConfig`], config loading)
//! - Soft-missing file reads ([`read_optional`])

pub mod config;
pub mod error;
pub mod fs;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    DEFAULT_DESCRIPTIONS_FILE, DEFAULT_KEYWORD_FILE, DEFAULT_README_NAME,
    DEFAULT_REPOSITORY_URL, DEFAULT_SOURCE_DIR, FileConfig, ScriptsConfig, load_description_map,
    load_file_config, parse_description_map,
};
pub use error::{Result, ScriptError};
pub use fs::{read_optional, read_optional_blocking};
pub use types::{DescriptionEntry, DescriptionMap, TokenRecord};
