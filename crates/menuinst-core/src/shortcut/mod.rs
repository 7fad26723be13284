//! Shortcut placement into menu directories.
//!
//! Provides functionality for:
//! - Parsing shortcut commands, including the file/web browser placeholders
//! - Creating double-clickable launchers for local executables
//! - Linking everything else (URLs, folders, bare command names) by symlink
//!
//! # Example
//!
//! ```rust,ignore
//! use menuinst::shortcut::{install_placement, AppBundleLauncher, ShortcutPlacement};
//! use menuinst::ShortcutSpec;
//!
//! fn main() -> menuinst::Result<()> {
//!     let spec = ShortcutSpec::new("Docs", ["{{WEBBROWSER}}", "https://example.com"]);
//!     let mut placement = ShortcutPlacement::new(&spec, "/Applications/Dev");
//!     let outcome = install_placement(&mut placement, &AppBundleLauncher::new())?;
//!     println!("{:?}", outcome);
//!     Ok(())
//! }
//! ```

mod app_bundle;
mod command;
mod launcher;
mod placement;

pub use app_bundle::{AppBundleLauncher, InfoPlist, InfoPlistBuilder};
pub use command::{CommandKind, ShortcutCommand};
pub use launcher::{LauncherFactory, LauncherSpec};
pub use placement::{install_placement, PlacementOutcome, ShortcutPlacement};
