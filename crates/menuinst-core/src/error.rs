//! Error types for the menu installer.
//!
//! Only fatal conditions live here. A shortcut whose target path is occupied by
//! a regular file or directory is reported through the install report instead.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for menu and shortcut installation.
#[derive(Debug, Error)]
pub enum MenuError {
    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Failed to create symlink from {src} to {dest}: {reason}")]
    SymlinkFailed {
        src: PathBuf,
        dest: PathBuf,
        reason: String,
    },

    // Menu resolution errors
    #[error("Unknown category '{category}' referenced by shortcut '{shortcut}'")]
    UnknownCategory { category: String, shortcut: String },

    #[error("Shortcut '{shortcut}' has no command to run")]
    EmptyCommand { shortcut: String },

    // Launcher collaborator errors
    #[error("Launcher creation failed for {name}: {message}")]
    LauncherFailed { name: String, message: String },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for installer operations.
pub type Result<T> = std::result::Result<T, MenuError>;

impl From<std::io::Error> for MenuError {
    fn from(err: std::io::Error) -> Self {
        MenuError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for MenuError {
    fn from(err: serde_json::Error) -> Self {
        MenuError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl MenuError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        MenuError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Whether this error came from a missing menu category.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, MenuError::UnknownCategory { .. })
    }
}
