//! Symbolic link handling.

use crate::error::{MenuError, Result};
use std::path::Path;

/// Whether `path` itself is a symbolic link (dangling links included).
pub fn is_symlink(path: &Path) -> bool {
    std::fs::symlink_metadata(path)
        .map(|metadata| metadata.file_type().is_symlink())
        .unwrap_or(false)
}

/// Create a symbolic link at `link` pointing to `target`.
///
/// The target is stored verbatim; it does not need to exist.
pub fn create_symlink(target: &Path, link: &Path) -> Result<()> {
    #[cfg(unix)]
    let created = std::os::unix::fs::symlink(target, link);

    #[cfg(windows)]
    let created = std::os::windows::fs::symlink_file(target, link);

    created.map_err(|e| MenuError::SymlinkFailed {
        src: target.to_path_buf(),
        dest: link.to_path_buf(),
        reason: e.to_string(),
    })
}
