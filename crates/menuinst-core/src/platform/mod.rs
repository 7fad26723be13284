//! Platform abstraction layer.
//!
//! All `#[cfg]` blocks for OS-specific behavior live here:
//! - `paths` - Location of the applications menu tree
//! - `permissions` - Executable bit handling
//! - `links` - Symbolic link detection and creation

pub mod links;
pub mod paths;
pub mod permissions;

pub use links::{create_symlink, is_symlink};
pub use paths::applications_dir;
pub use permissions::{is_executable, set_executable};
