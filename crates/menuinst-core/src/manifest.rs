//! Declarative menu and shortcut descriptions.
//!
//! These are the inputs of an installation. The installer itself never parses
//! files; [`InstallManifest`] exists for callers such as the CLI that keep the
//! description in a JSON document.

use crate::config::InstallMode;
use crate::error::{MenuError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// One folder in the installed menu hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSpec {
    /// Identifier, used as the category segment when `category` is unset.
    pub id: String,
    /// Directory name on disk.
    pub name: String,
    /// Explicit category segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Child menus, created inside this menu's directory.
    #[serde(rename = "sub-menus", default, skip_serializing_if = "Vec::is_empty")]
    pub sub_menus: Vec<MenuSpec>,
}

impl MenuSpec {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            sub_menus: Vec::new(),
        }
    }

    /// Set an explicit category segment.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Append a child menu.
    pub fn with_sub_menu(mut self, child: MenuSpec) -> Self {
        self.sub_menus.push(child);
        self
    }

    /// The category segment this node contributes.
    pub fn category_segment(&self) -> &str {
        self.category.as_deref().unwrap_or(&self.id)
    }
}

/// One launchable item, placed into every listed category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortcutSpec {
    /// Display and file name.
    pub name: String,
    /// Command tokens: a command or placeholder followed by arguments.
    pub cmd: Vec<String>,
    /// Category keys the shortcut appears under. Duplicates are installed twice.
    pub categories: Vec<String>,
    /// Remaining fields, passed through to the launcher collaborator.
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl ShortcutSpec {
    pub fn new<I, S>(name: impl Into<String>, cmd: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            cmd: cmd.into_iter().map(Into::into).collect(),
            categories: Vec::new(),
            metadata: Map::new(),
        }
    }

    /// Add a category key.
    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Attach a pass-through metadata field.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// String-valued metadata lookup.
    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(Value::as_str)
    }
}

/// A complete installation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstallManifest {
    #[serde(default)]
    pub menus: Vec<MenuSpec>,
    #[serde(default)]
    pub shortcuts: Vec<ShortcutSpec>,
    #[serde(default)]
    pub mode: InstallMode,
}

impl InstallManifest {
    /// Parse a manifest from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a manifest from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| MenuError::io_with_path(e, path))?;
        Self::from_json_str(&content).map_err(|e| match e {
            MenuError::Json { message, source } => MenuError::Json {
                message: format!("{}: {}", path.display(), message),
                source,
            },
            other => other,
        })
    }
}
