//! Menuinst - application menu and shortcut installation.
//!
//! Menus are plain directories under an applications root, one per menu node.
//! Shortcuts are placed into those directories by hierarchical category key,
//! either as a double-clickable launcher (for local executables) or as a
//! symbolic link (for URLs, folders and command names).
//!
//! # Example
//!
//! ```rust,ignore
//! use menuinst::{InstallMode, MenuInstaller, MenuSpec, ShortcutSpec};
//!
//! fn main() -> menuinst::Result<()> {
//!     let menus = vec![MenuSpec::new("dev", "Development")
//!         .with_sub_menu(MenuSpec::new("tools", "Tools"))];
//!     let shortcuts = vec![ShortcutSpec::new("Docs", ["{{WEBBROWSER}}", "https://example.com"])
//!         .in_category("dev.tools")];
//!
//!     let installer = MenuInstaller::new(InstallMode::User)?;
//!     let report = installer.install_application_menus(&menus, &shortcuts)?;
//!     println!("{} links created", report.links.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod installer;
pub mod manifest;
pub mod menu;
pub mod platform;
pub mod shortcut;

pub use config::{InstallMode, InstallerConfig};
pub use error::{MenuError, Result};
pub use installer::{install_shortcuts, InstallReport, MenuInstaller};
pub use manifest::{InstallManifest, MenuSpec, ShortcutSpec};
pub use menu::{build_menus, category_key, CategoryMap};
pub use shortcut::{
    AppBundleLauncher, CommandKind, LauncherFactory, LauncherSpec, PlacementOutcome,
    ShortcutCommand, ShortcutPlacement,
};
