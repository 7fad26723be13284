//! Location of the applications menu tree.

use crate::config::{InstallMode, InstallerConfig};
use crate::error::{MenuError, Result};
use std::path::PathBuf;

/// Get the root directory menus are installed under.
///
/// # Platform Behavior
/// - **System**: `/Applications`
/// - **User**: `~/Applications`, home resolved through the `dirs` crate
pub fn applications_dir(mode: InstallMode) -> Result<PathBuf> {
    match mode {
        InstallMode::System => Ok(PathBuf::from(InstallerConfig::SYSTEM_APPLICATIONS_DIR)),
        InstallMode::User => {
            let home = dirs::home_dir().ok_or_else(|| MenuError::Config {
                message: "Could not determine home directory".to_string(),
            })?;
            Ok(home.join(InstallerConfig::USER_APPLICATIONS_DIR_NAME))
        }
    }
}
