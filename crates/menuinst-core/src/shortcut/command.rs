//! Shortcut command parsing.

use crate::config::InstallerConfig;
use crate::error::{MenuError, Result};

/// What activating a shortcut should open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Run the command directly.
    External,
    /// Open the target in the platform file browser.
    FileBrowser,
    /// Open the target in the default web browser.
    WebBrowser,
}

impl CommandKind {
    /// Recognize a leading placeholder token.
    pub fn from_placeholder(token: &str) -> Option<Self> {
        match token {
            InstallerConfig::FILE_BROWSER_PLACEHOLDER => Some(CommandKind::FileBrowser),
            InstallerConfig::WEB_BROWSER_PLACEHOLDER => Some(CommandKind::WebBrowser),
            _ => None,
        }
    }
}

/// A shortcut's `cmd` tokens, resolved once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutCommand {
    pub kind: CommandKind,
    /// Command path, command name, folder or URL.
    pub target: String,
    pub args: Vec<String>,
}

impl ShortcutCommand {
    /// Parse command tokens of the shortcut named `shortcut`.
    ///
    /// A browser placeholder in first position is dropped: the platform opens
    /// folders and URLs with the right application when the link is activated.
    pub fn parse(shortcut: &str, tokens: &[String]) -> Result<Self> {
        let (kind, rest) = match tokens.split_first() {
            Some((first, rest)) => match CommandKind::from_placeholder(first) {
                Some(kind) => (kind, rest),
                None => (CommandKind::External, tokens),
            },
            None => (CommandKind::External, tokens),
        };

        let (target, args) = rest.split_first().ok_or_else(|| MenuError::EmptyCommand {
            shortcut: shortcut.to_string(),
        })?;

        Ok(Self {
            kind,
            target: target.clone(),
            args: args.to_vec(),
        })
    }

    /// Command followed by its arguments, as handed to a launcher.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.target.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}
