//! Menuinst CLI - install application menus and shortcuts from a manifest.
//!
//! The manifest is a JSON document with `menus`, `shortcuts` and an optional
//! `mode` (`user` or `system`).

use anyhow::{Context, Result};
use clap::Parser;
use menuinst::{InstallManifest, InstallMode, MenuInstaller};
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "menuinst")]
#[command(about = "Install application menus and shortcuts")]
struct Args {
    /// Path to the JSON manifest describing menus and shortcuts
    #[arg(short, long)]
    manifest: PathBuf,

    /// Applications root to install under (overrides the install mode)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Install for the current user or system-wide (overrides the manifest)
    #[arg(long)]
    mode: Option<InstallMode>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    let manifest = InstallManifest::from_json_file(&args.manifest)
        .with_context(|| format!("Failed to load manifest {}", args.manifest.display()))?;

    let installer = build_installer(&args, &manifest)?;
    info!(
        "Installing {} menus and {} shortcuts under {}",
        manifest.menus.len(),
        manifest.shortcuts.len(),
        installer.applications_dir().display()
    );

    let report = installer
        .install_manifest(&manifest)
        .context("Menu installation failed")?;

    if !report.is_clean() {
        warn!(
            "{} shortcut(s) skipped because their path is already taken",
            report.conflicts.len()
        );
    }

    Ok(())
}

/// Resolve the applications root from the flags and manifest.
fn build_installer(args: &Args, manifest: &InstallManifest) -> Result<MenuInstaller> {
    if let Some(ref root) = args.root {
        return Ok(MenuInstaller::with_root(root));
    }

    let mode = args.mode.unwrap_or(manifest.mode);
    MenuInstaller::new(mode)
        .with_context(|| format!("Cannot resolve {} applications directory", mode))
}
