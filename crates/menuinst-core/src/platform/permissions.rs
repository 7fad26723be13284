//! Platform-specific file permission handling.

use crate::error::{MenuError, Result};
use std::path::Path;
use tracing::debug;

/// Make a file executable.
///
/// # Platform Behavior
/// - **Linux/macOS**: Sets the executable bit (mode 0o755)
/// - **Windows**: No-op (executability is determined by file extension)
pub fn set_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let metadata = std::fs::metadata(path).map_err(|e| MenuError::io_with_path(e, path))?;
        let mut permissions = metadata.permissions();
        permissions.set_mode(0o755);
        std::fs::set_permissions(path, permissions)
            .map_err(|e| MenuError::io_with_path(e, path))?;
        debug!("Set executable permissions on: {}", path.display());
    }

    #[cfg(windows)]
    {
        debug!("Skipping executable bit on Windows for: {}", path.display());
    }

    Ok(())
}

/// Check if a path is a regular file the current user could execute.
///
/// # Platform Behavior
/// - **Linux/macOS**: Regular file passing `access(2)` with `X_OK` for the
///   calling user, so owner, group and other bits are applied as the kernel does
/// - **Windows**: Regular file with an executable extension (.exe, .bat, .cmd, .com)
pub fn is_executable(path: &Path) -> bool {
    let is_file = std::fs::metadata(path)
        .map(|metadata| metadata.is_file())
        .unwrap_or(false);
    if !is_file {
        return false;
    }

    #[cfg(unix)]
    {
        use nix::unistd::{access, AccessFlags};
        access(path, AccessFlags::X_OK).is_ok()
    }

    #[cfg(windows)]
    {
        path.extension()
            .map(|ext| {
                let ext = ext.to_string_lossy().to_lowercase();
                matches!(ext.as_str(), "exe" | "bat" | "cmd" | "com")
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_set_executable() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("launch.sh");
        File::create(&file_path).unwrap();

        set_executable(&file_path).unwrap();

        #[cfg(unix)]
        assert!(is_executable(&file_path));
    }

    #[cfg(unix)]
    #[test]
    fn test_plain_file_is_not_executable() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("notes.txt");
        File::create(&file_path).unwrap();

        assert!(!is_executable(&file_path));
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_is_not_executable() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("bin");
        fs::create_dir(&dir).unwrap();

        // Directories carry execute bits but are not commands.
        assert!(!is_executable(&dir));
    }

    #[cfg(unix)]
    #[test]
    fn test_owner_only_execute_bit() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let owner_exec = temp_dir.path().join("owner-tool");
        let read_only = temp_dir.path().join("read-only-tool");
        File::create(&owner_exec).unwrap();
        File::create(&read_only).unwrap();
        fs::set_permissions(&owner_exec, fs::Permissions::from_mode(0o700)).unwrap();
        fs::set_permissions(&read_only, fs::Permissions::from_mode(0o644)).unwrap();

        // The test process owns both files, so the owner bits decide.
        assert!(is_executable(&owner_exec));
        assert!(!is_executable(&read_only));
    }

    #[test]
    fn test_missing_file_is_not_executable() {
        assert!(!is_executable(Path::new("/nonexistent/tool")));
    }
}
