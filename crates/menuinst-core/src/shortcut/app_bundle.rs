//! Application bundle (`Name.app`) generation.
//!
//! A bundle is a directory Finder treats as a single double-clickable item:
//!
//! ```text
//! Name.app/
//!   Contents/
//!     Info.plist
//!     MacOS/Name        executable shell script running the target
//!     Resources/        icon copied here when the shortcut names one
//! ```

use super::launcher::{LauncherFactory, LauncherSpec};
use crate::config::BundleConfig;
use crate::error::{MenuError, Result};
use crate::platform;
use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The keys written to a bundle's `Info.plist`.
#[derive(Debug, Clone)]
pub struct InfoPlist {
    /// Name shown by Finder.
    pub bundle_name: String,
    /// File name of the script under `Contents/MacOS`.
    pub executable: String,
    /// Reverse-DNS identifier.
    pub identifier: String,
    /// Icon file name under `Contents/Resources`.
    pub icon_file: Option<String>,
    pub version: Option<String>,
    pub package_type: String,
}

impl Default for InfoPlist {
    fn default() -> Self {
        Self {
            bundle_name: String::new(),
            executable: String::new(),
            identifier: String::new(),
            icon_file: None,
            version: None,
            package_type: BundleConfig::PACKAGE_TYPE.to_string(),
        }
    }
}

impl InfoPlist {
    pub fn builder() -> InfoPlistBuilder {
        InfoPlistBuilder::new()
    }

    /// Render the property list XML.
    pub fn to_xml(&self) -> String {
        let mut content = String::new();
        let mut entry = |key: &str, value: &str| {
            let _ = writeln!(content, "  <key>{}</key>", key);
            let _ = writeln!(content, "  <string>{}</string>", escape_xml(value));
        };

        entry("CFBundleName", &self.bundle_name);
        entry("CFBundleExecutable", &self.executable);
        entry("CFBundleIdentifier", &self.identifier);
        entry("CFBundlePackageType", &self.package_type);
        if let Some(ref icon) = self.icon_file {
            entry("CFBundleIconFile", icon);
        }
        if let Some(ref version) = self.version {
            entry("CFBundleShortVersionString", version);
        }

        format!(
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
                "<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" ",
                "\"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n",
                "<plist version=\"1.0\">\n<dict>\n{}</dict>\n</plist>\n"
            ),
            content
        )
    }
}

/// Builder for bundle property lists.
pub struct InfoPlistBuilder {
    plist: InfoPlist,
}

impl InfoPlistBuilder {
    pub fn new() -> Self {
        Self {
            plist: InfoPlist::default(),
        }
    }

    pub fn bundle_name(mut self, name: impl Into<String>) -> Self {
        self.plist.bundle_name = name.into();
        self
    }

    pub fn executable(mut self, executable: impl Into<String>) -> Self {
        self.plist.executable = executable.into();
        self
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.plist.identifier = identifier.into();
        self
    }

    pub fn icon_file(mut self, icon_file: impl Into<String>) -> Self {
        self.plist.icon_file = Some(icon_file.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.plist.version = Some(version.into());
        self
    }

    pub fn build(self) -> InfoPlist {
        self.plist
    }
}

impl Default for InfoPlistBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Default launcher factory writing a minimal application bundle.
#[derive(Debug, Clone, Default)]
pub struct AppBundleLauncher;

impl AppBundleLauncher {
    pub fn new() -> Self {
        Self
    }

    /// Location of the bundle for a launcher spec.
    pub fn bundle_path(spec: &LauncherSpec) -> PathBuf {
        spec.menu_dir
            .join(format!("{}.{}", spec.name, BundleConfig::EXTENSION))
    }

    /// Shell script running the target with any extra arguments forwarded.
    fn script_content(args: &[String]) -> String {
        let command = args
            .iter()
            .map(|arg| shell_quote(arg))
            .collect::<Vec<_>>()
            .join(" ");
        format!("#!/bin/sh\nexec {} \"$@\"\n", command)
    }

    fn identifier(name: &str) -> String {
        let slug: String = name
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '-' })
            .collect();
        format!(
            "{}.{}",
            BundleConfig::IDENTIFIER_PREFIX,
            slug.trim_matches('-')
        )
    }

    /// Copy the icon named by the `icon` metadata into `Resources`.
    fn install_icon(spec: &LauncherSpec, resources_dir: &Path) -> Option<String> {
        let icon = Path::new(spec.metadata_str("icon")?);
        let file_name = icon.file_name()?.to_string_lossy().to_string();

        if !icon.is_file() {
            warn!("Icon {} for {} not found, skipping", icon.display(), spec.name);
            return None;
        }

        let install = fs::create_dir_all(resources_dir)
            .and_then(|_| fs::copy(icon, resources_dir.join(&file_name)));
        match install {
            Ok(_) => Some(file_name),
            Err(e) => {
                warn!("Failed to install icon for {}: {}", spec.name, e);
                None
            }
        }
    }
}

impl LauncherFactory for AppBundleLauncher {
    fn create(&self, spec: &LauncherSpec) -> Result<PathBuf> {
        if spec.args.is_empty() {
            return Err(MenuError::LauncherFailed {
                name: spec.name.clone(),
                message: "no executable given".to_string(),
            });
        }

        let bundle = Self::bundle_path(spec);

        // Replace any previous bundle so reinstalls pick up new arguments.
        if platform::is_symlink(&bundle) || bundle.is_file() {
            fs::remove_file(&bundle).map_err(|e| MenuError::io_with_path(e, &bundle))?;
        } else if bundle.is_dir() {
            fs::remove_dir_all(&bundle).map_err(|e| MenuError::Io {
                message: "remove previous bundle".to_string(),
                path: Some(bundle.clone()),
                source: Some(e),
            })?;
        }

        let contents = bundle.join(BundleConfig::CONTENTS_DIR);
        let executable_dir = contents.join(BundleConfig::EXECUTABLE_DIR);
        fs::create_dir_all(&executable_dir).map_err(|e| MenuError::Io {
            message: "create bundle directory".to_string(),
            path: Some(executable_dir.clone()),
            source: Some(e),
        })?;

        let script_path = executable_dir.join(&spec.name);
        fs::write(&script_path, Self::script_content(&spec.args)).map_err(|e| MenuError::Io {
            message: "write launcher script".to_string(),
            path: Some(script_path.clone()),
            source: Some(e),
        })?;
        platform::set_executable(&script_path)?;

        let mut plist = InfoPlist::builder()
            .bundle_name(&spec.name)
            .executable(&spec.name)
            .identifier(
                spec.metadata_str("id")
                    .map(str::to_string)
                    .unwrap_or_else(|| Self::identifier(&spec.name)),
            );
        if let Some(icon) =
            Self::install_icon(spec, &contents.join(BundleConfig::RESOURCES_DIR))
        {
            plist = plist.icon_file(icon);
        }
        if let Some(version) = spec.metadata_str("version") {
            plist = plist.version(version);
        }

        let plist_path = contents.join(BundleConfig::INFO_PLIST);
        fs::write(&plist_path, plist.build().to_xml()).map_err(|e| MenuError::Io {
            message: "write Info.plist".to_string(),
            path: Some(plist_path.clone()),
            source: Some(e),
        })?;

        debug!("Wrote application bundle {}", bundle.display());

        Ok(bundle)
    }
}

/// Single-quote a token for `/bin/sh`.
fn shell_quote(token: &str) -> String {
    if !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "/._-=:,+@%".contains(c))
    {
        token.to_string()
    } else {
        format!("'{}'", token.replace('\'', r"'\''"))
    }
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
