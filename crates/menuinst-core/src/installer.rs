//! Two-phase menu installation.
//!
//! Phase one creates the menu directories and builds the category map. Phase
//! two places every shortcut into the directory of each of its categories.

use crate::config::InstallMode;
use crate::error::Result;
use crate::manifest::{InstallManifest, MenuSpec, ShortcutSpec};
use crate::menu::{build_menus, CategoryMap};
use crate::platform;
use crate::shortcut::{
    install_placement, AppBundleLauncher, LauncherFactory, PlacementOutcome, ShortcutPlacement,
};
use std::path::{Path, PathBuf};
use tracing::info;

/// Summary of one installation run.
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    /// Category keys mapped to their menu directories.
    pub categories: CategoryMap,
    /// Launchers created for local executables.
    pub launchers: Vec<PathBuf>,
    /// Symlinks created, including replaced ones.
    pub links: Vec<PathBuf>,
    /// Symlinks that replaced an earlier link.
    pub relinked: Vec<PathBuf>,
    /// Paths skipped because something other than a link was in the way.
    pub conflicts: Vec<PathBuf>,
}

impl InstallReport {
    fn record(&mut self, outcome: PlacementOutcome) {
        match outcome {
            PlacementOutcome::Launcher(path) => self.launchers.push(path),
            PlacementOutcome::Linked(path) => self.links.push(path),
            PlacementOutcome::Relinked(path) => {
                self.relinked.push(path.clone());
                self.links.push(path);
            }
            PlacementOutcome::Conflict(path) => self.conflicts.push(path),
        }
    }

    /// Whether every placement was installed.
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// Installs menus and shortcuts under an applications root.
pub struct MenuInstaller {
    applications_dir: PathBuf,
    launcher: Box<dyn LauncherFactory>,
}

impl MenuInstaller {
    /// Create an installer for the applications directory of `mode`.
    pub fn new(mode: InstallMode) -> Result<Self> {
        Ok(Self::with_root(platform::applications_dir(mode)?))
    }

    /// Create an installer rooted at an explicit directory.
    pub fn with_root(applications_dir: impl Into<PathBuf>) -> Self {
        Self {
            applications_dir: applications_dir.into(),
            launcher: Box::new(AppBundleLauncher::new()),
        }
    }

    /// Use a different launcher factory for executables.
    pub fn with_launcher(mut self, launcher: impl LauncherFactory + 'static) -> Self {
        self.launcher = Box::new(launcher);
        self
    }

    pub fn applications_dir(&self) -> &Path {
        &self.applications_dir
    }

    /// Install all menus, then all shortcuts.
    ///
    /// An unknown category or a filesystem failure aborts the run. A shortcut
    /// path occupied by a regular file or directory is skipped and listed in
    /// [`InstallReport::conflicts`].
    pub fn install_application_menus(
        &self,
        menus: &[MenuSpec],
        shortcuts: &[ShortcutSpec],
    ) -> Result<InstallReport> {
        let categories = build_menus(&self.applications_dir, menus)?;
        let outcomes = install_shortcuts(&categories, shortcuts, self.launcher.as_ref())?;

        let mut report = InstallReport {
            categories,
            ..Default::default()
        };
        for outcome in outcomes {
            report.record(outcome);
        }

        info!(
            "Installed {} menus under {}: {} launchers, {} links, {} conflicts",
            report.categories.len(),
            self.applications_dir.display(),
            report.launchers.len(),
            report.links.len(),
            report.conflicts.len()
        );

        Ok(report)
    }

    /// Install everything a manifest describes.
    pub fn install_manifest(&self, manifest: &InstallManifest) -> Result<InstallReport> {
        self.install_application_menus(&manifest.menus, &manifest.shortcuts)
    }
}

/// Place every shortcut into each of its categories, in order.
pub fn install_shortcuts(
    categories: &CategoryMap,
    shortcuts: &[ShortcutSpec],
    launcher: &dyn LauncherFactory,
) -> Result<Vec<PlacementOutcome>> {
    let mut outcomes = Vec::new();

    for shortcut in shortcuts {
        for category in &shortcut.categories {
            let menu_dir = categories.resolve(category, &shortcut.name)?;
            let mut placement = ShortcutPlacement::new(shortcut, menu_dir);
            outcomes.push(install_placement(&mut placement, launcher)?);
        }
    }

    Ok(outcomes)
}
