//! Centralized configuration for the menu installer.
//!
//! This module provides the fixed names and markers used when laying out menus
//! and launchers, plus the install mode selecting where the menu tree lives.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Installer-level constants.
pub struct InstallerConfig;

impl InstallerConfig {
    /// Root of the system-wide menu tree.
    pub const SYSTEM_APPLICATIONS_DIR: &'static str = "/Applications";
    /// Directory under the home directory holding the per-user menu tree.
    pub const USER_APPLICATIONS_DIR_NAME: &'static str = "Applications";
    /// Separator between hierarchical category segments.
    pub const CATEGORY_SEPARATOR: char = '.';

    // Command placeholders. The platform opens folders and URLs on its own.
    pub const FILE_BROWSER_PLACEHOLDER: &'static str = "{{FILEBROWSER}}";
    pub const WEB_BROWSER_PLACEHOLDER: &'static str = "{{WEBBROWSER}}";
}

/// Layout of the double-clickable bundles produced for executables.
pub struct BundleConfig;

impl BundleConfig {
    pub const EXTENSION: &'static str = "app";
    pub const CONTENTS_DIR: &'static str = "Contents";
    pub const EXECUTABLE_DIR: &'static str = "MacOS";
    pub const RESOURCES_DIR: &'static str = "Resources";
    pub const INFO_PLIST: &'static str = "Info.plist";
    pub const PACKAGE_TYPE: &'static str = "APPL";
    pub const IDENTIFIER_PREFIX: &'static str = "org.menuinst";
}

/// Whether menus are installed for the current user or system-wide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallMode {
    User,
    #[default]
    System,
}

impl fmt::Display for InstallMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallMode::User => write!(f, "user"),
            InstallMode::System => write!(f, "system"),
        }
    }
}

impl FromStr for InstallMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(InstallMode::User),
            "system" => Ok(InstallMode::System),
            other => Err(format!("unknown install mode: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_mode_parse() {
        assert_eq!("user".parse::<InstallMode>(), Ok(InstallMode::User));
        assert_eq!(" System ".parse::<InstallMode>(), Ok(InstallMode::System));
        assert!("global".parse::<InstallMode>().is_err());
    }

    #[test]
    fn test_install_mode_default_is_system() {
        assert_eq!(InstallMode::default(), InstallMode::System);
        assert_eq!(InstallMode::System.to_string(), "system");
    }
}
