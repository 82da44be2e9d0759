//! Core domain types shared by the keyword and readme pipelines.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Fallback used when a subdirectory has no usable fragment description.
pub const NO_ENTRY_DESCRIPTION: &str = "No description.";

/// Fallback used when a top-level directory is missing from the description map.
pub const NO_DIRECTORY_DESCRIPTION: &str = "No Description.";

// ---------------------------------------------------------------------------
// TokenRecord
// ---------------------------------------------------------------------------

/// A single reserved word pulled out of the `KeyWord` enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    /// Identifier exactly as written in the enumeration (e.g. `SelfKeyword`).
    pub name: String,
    /// Lowercase display form with the `keyword` marker removed (e.g. `self`).
    pub value: String,
}

// ---------------------------------------------------------------------------
// DescriptionEntry
// ---------------------------------------------------------------------------

/// Description of one subdirectory, as listed in its parent's readme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionEntry {
    /// Subdirectory name.
    pub name: String,
    /// Second line of the subdirectory's fragment document, or [`NO_ENTRY_DESCRIPTION`].
    pub description: String,
}

impl DescriptionEntry {
    /// Entry for a subdirectory without a usable fragment.
    pub fn fallback(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: NO_ENTRY_DESCRIPTION.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// DescriptionMap
// ---------------------------------------------------------------------------

/// Top-level directory name → override description, from `descriptions.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DescriptionMap(pub HashMap<String, String>);

impl DescriptionMap {
    /// Resolve the description for a top-level directory, falling back to
    /// [`NO_DIRECTORY_DESCRIPTION`] when the name is unmapped or empty.
    pub fn resolve(&self, name: &str) -> &str {
        match self.0.get(name) {
            Some(desc) if !desc.is_empty() => desc.as_str(),
            _ => NO_DIRECTORY_DESCRIPTION,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for DescriptionMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
