//! Hierarchical category keys and the category-to-directory map.

use crate::config::InstallerConfig;
use crate::error::{MenuError, Result};
use std::collections::hash_map::{self, HashMap};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Compose the category key of a node from its parent key and own segment.
///
/// The parent key is only prepended when it is longer than one character, so a
/// top-level node (empty parent) keeps its bare segment.
pub fn category_key(parent_category: &str, segment: &str) -> String {
    if parent_category.chars().count() > 1 {
        format!(
            "{}{}{}",
            parent_category,
            InstallerConfig::CATEGORY_SEPARATOR,
            segment
        )
    } else {
        segment.to_string()
    }
}

/// Mapping from category key to the menu directory it resolves to.
///
/// Built fresh for every installation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    entries: HashMap<String, PathBuf>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a category. A later insert for the same key wins.
    pub fn insert(&mut self, category: impl Into<String>, path: impl Into<PathBuf>) {
        let category = category.into();
        let path = path.into();
        if let Some(previous) = self.entries.insert(category.clone(), path.clone()) {
            if previous != path {
                warn!(
                    "Category {} remapped from {} to {}",
                    category,
                    previous.display(),
                    path.display()
                );
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<&Path> {
        self.entries.get(category).map(PathBuf::as_path)
    }

    /// Look up the directory for a category a shortcut refers to.
    pub fn resolve(&self, category: &str, shortcut: &str) -> Result<&Path> {
        self.get(category).ok_or_else(|| MenuError::UnknownCategory {
            category: category.to_string(),
            shortcut: shortcut.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, PathBuf> {
        self.entries.iter()
    }
}
