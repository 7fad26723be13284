//! Installing one shortcut into one menu directory.

use super::command::ShortcutCommand;
use super::launcher::{LauncherFactory, LauncherSpec};
use crate::error::{MenuError, Result};
use crate::manifest::ShortcutSpec;
use crate::platform;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

/// A shortcut bound to the menu directory of one of its categories.
///
/// Each placement owns its copy of the shortcut, so resolving one category
/// never affects another.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortcutPlacement {
    pub shortcut: ShortcutSpec,
    pub menu_dir: PathBuf,
    /// Launcher argv, set once the command turns out to be a local executable.
    pub args: Option<Vec<String>>,
}

impl ShortcutPlacement {
    pub fn new(shortcut: &ShortcutSpec, menu_dir: impl Into<PathBuf>) -> Self {
        Self {
            shortcut: shortcut.clone(),
            menu_dir: menu_dir.into(),
            args: None,
        }
    }

    /// Where a symlink for this placement goes.
    pub fn link_path(&self) -> PathBuf {
        self.menu_dir.join(&self.shortcut.name)
    }

    fn launcher_spec(&self, args: Vec<String>) -> LauncherSpec {
        LauncherSpec {
            name: self.shortcut.name.clone(),
            menu_dir: self.menu_dir.clone(),
            args,
            metadata: self.shortcut.metadata.clone(),
        }
    }
}

/// What installing a placement produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// A launcher was created by the launcher factory.
    Launcher(PathBuf),
    /// A new symlink was created.
    Linked(PathBuf),
    /// An existing symlink was removed and recreated.
    Relinked(PathBuf),
    /// Something other than a symlink occupies the path; nothing was created.
    Conflict(PathBuf),
}

impl PlacementOutcome {
    pub fn path(&self) -> &Path {
        match self {
            PlacementOutcome::Launcher(path)
            | PlacementOutcome::Linked(path)
            | PlacementOutcome::Relinked(path)
            | PlacementOutcome::Conflict(path) => path,
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, PlacementOutcome::Conflict(_))
    }
}

/// Install a single placement.
///
/// Local executables get a launcher from `launcher`. Anything else becomes a
/// symlink named after the shortcut pointing at the command target; arguments
/// are not kept in that case.
pub fn install_placement(
    placement: &mut ShortcutPlacement,
    launcher: &dyn LauncherFactory,
) -> Result<PlacementOutcome> {
    let command = ShortcutCommand::parse(&placement.shortcut.name, &placement.shortcut.cmd)?;

    if platform::is_executable(Path::new(&command.target)) {
        let args = command.argv();
        placement.args = Some(args.clone());
        let path = launcher.create(&placement.launcher_spec(args))?;
        debug!(
            "Created launcher {} for {}",
            path.display(),
            placement.shortcut.name
        );
        return Ok(PlacementOutcome::Launcher(path));
    }

    let path = placement.link_path();

    let mut relinked = false;
    if platform::is_symlink(&path) {
        warn!("Link {} already exists, unlinking", path.display());
        fs::remove_file(&path).map_err(|e| MenuError::Io {
            message: "remove existing link".to_string(),
            path: Some(path.clone()),
            source: Some(e),
        })?;
        relinked = true;
    }

    if path.exists() {
        error!("{} exists, can't create link", path.display());
        return Ok(PlacementOutcome::Conflict(path));
    }

    platform::create_symlink(Path::new(&command.target), &path)?;
    debug!("Linked {} -> {}", path.display(), command.target);

    if relinked {
        Ok(PlacementOutcome::Relinked(path))
    } else {
        Ok(PlacementOutcome::Linked(path))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingLauncher {
        specs: Mutex<Vec<LauncherSpec>>,
    }

    impl LauncherFactory for RecordingLauncher {
        fn create(&self, spec: &LauncherSpec) -> Result<PathBuf> {
            self.specs.lock().unwrap().push(spec.clone());
            Ok(spec.menu_dir.join(format!("{}.app", spec.name)))
        }
    }

    fn executable(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\n").unwrap();
        platform::set_executable(&path).unwrap();
        path
    }

    #[test]
    fn test_executable_gets_launcher() {
        let temp_dir = TempDir::new().unwrap();
        let tool = executable(temp_dir.path(), "tool");
        let tool_str = tool.to_string_lossy().to_string();

        let spec = ShortcutSpec::new("Tool", [tool_str.as_str(), "--fast"])
            .with_metadata("icon", "tool.icns");
        let mut placement = ShortcutPlacement::new(&spec, temp_dir.path());
        let launcher = RecordingLauncher::default();

        let outcome = install_placement(&mut placement, &launcher).unwrap();

        assert_eq!(
            outcome,
            PlacementOutcome::Launcher(temp_dir.path().join("Tool.app"))
        );
        let expected = vec![tool_str.clone(), "--fast".to_string()];
        assert_eq!(placement.args, Some(expected.clone()));

        let specs = launcher.specs.lock().unwrap();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].args, expected);
        assert_eq!(specs[0].metadata_str("icon"), Some("tool.icns"));
        assert!(!platform::is_symlink(&temp_dir.path().join("Tool")));
    }

    #[test]
    fn test_non_executable_gets_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let spec = ShortcutSpec::new("Site", ["{{WEBBROWSER}}", "http://example.com"]);
        let mut placement = ShortcutPlacement::new(&spec, temp_dir.path());
        let launcher = RecordingLauncher::default();

        let outcome = install_placement(&mut placement, &launcher).unwrap();

        let link = temp_dir.path().join("Site");
        assert_eq!(outcome, PlacementOutcome::Linked(link.clone()));
        assert_eq!(fs::read_link(&link).unwrap(), Path::new("http://example.com"));
        assert!(placement.args.is_none());
        assert!(launcher.specs.lock().unwrap().is_empty());
    }

    #[test]
    fn test_symlink_drops_arguments() {
        let temp_dir = TempDir::new().unwrap();
        let spec = ShortcutSpec::new("Python", ["python3", "-m", "idlelib"]);
        let mut placement = ShortcutPlacement::new(&spec, temp_dir.path());

        install_placement(&mut placement, &RecordingLauncher::default()).unwrap();

        assert_eq!(
            fs::read_link(temp_dir.path().join("Python")).unwrap(),
            Path::new("python3")
        );
    }

    #[test]
    fn test_existing_link_is_replaced() {
        let temp_dir = TempDir::new().unwrap();
        let link = temp_dir.path().join("Site");
        platform::create_symlink(Path::new("http://old.example.com"), &link).unwrap();

        let spec = ShortcutSpec::new("Site", ["{{WEBBROWSER}}", "http://example.com"]);
        let mut placement = ShortcutPlacement::new(&spec, temp_dir.path());

        let outcome = install_placement(&mut placement, &RecordingLauncher::default()).unwrap();

        assert_eq!(outcome, PlacementOutcome::Relinked(link.clone()));
        assert_eq!(fs::read_link(&link).unwrap(), Path::new("http://example.com"));
    }

    #[test]
    fn test_existing_file_is_a_conflict() {
        let temp_dir = TempDir::new().unwrap();
        let occupied = temp_dir.path().join("Site");
        fs::write(&occupied, "keep me").unwrap();

        let spec = ShortcutSpec::new("Site", ["{{WEBBROWSER}}", "http://example.com"]);
        let mut placement = ShortcutPlacement::new(&spec, temp_dir.path());

        let outcome = install_placement(&mut placement, &RecordingLauncher::default()).unwrap();

        assert!(outcome.is_conflict());
        assert_eq!(outcome.path(), occupied.as_path());
        assert_eq!(fs::read_to_string(&occupied).unwrap(), "keep me");
    }

    #[test]
    fn test_existing_directory_is_a_conflict() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("Home")).unwrap();

        let spec = ShortcutSpec::new("Home", ["{{FILEBROWSER}}", "/Users/me"]);
        let mut placement = ShortcutPlacement::new(&spec, temp_dir.path());

        let outcome = install_placement(&mut placement, &RecordingLauncher::default()).unwrap();

        assert!(outcome.is_conflict());
        assert!(temp_dir.path().join("Home").is_dir());
    }

    #[test]
    fn test_empty_command_fails() {
        let temp_dir = TempDir::new().unwrap();
        let spec = ShortcutSpec::new("Nothing", Vec::<String>::new());
        let mut placement = ShortcutPlacement::new(&spec, temp_dir.path());

        let result = install_placement(&mut placement, &RecordingLauncher::default());

        assert!(matches!(result, Err(MenuError::EmptyCommand { .. })));
    }
}
