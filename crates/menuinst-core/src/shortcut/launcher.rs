//! Contract with the launcher-creation collaborator.

use crate::error::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Everything a launcher factory needs to wrap an executable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LauncherSpec {
    pub name: String,
    /// Menu directory the launcher belongs in.
    pub menu_dir: PathBuf,
    /// Executable path followed by its arguments.
    pub args: Vec<String>,
    /// Pass-through shortcut fields (icon, comment, ...).
    pub metadata: Map<String, Value>,
}

impl LauncherSpec {
    /// String-valued metadata lookup.
    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(Value::as_str)
    }
}

/// Produces double-clickable launchers for executables.
pub trait LauncherFactory: Send + Sync {
    /// Create the launcher and return where it was written.
    fn create(&self, spec: &LauncherSpec) -> Result<PathBuf>;
}
