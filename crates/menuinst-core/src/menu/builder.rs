//! Breadth-first creation of menu directories.

use super::category::{category_key, CategoryMap};
use crate::error::{MenuError, Result};
use crate::manifest::MenuSpec;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Pending menu node with the directory and category of its parent.
struct MenuWork<'a> {
    spec: &'a MenuSpec,
    parent_path: PathBuf,
    parent_category: String,
}

/// Create one directory per menu node under `root` and map every category.
///
/// Nodes are processed first-in first-out across the whole forest. Existing
/// directories are left untouched.
pub fn build_menus(root: &Path, menus: &[MenuSpec]) -> Result<CategoryMap> {
    let mut category_map = CategoryMap::new();
    let mut queue: VecDeque<MenuWork<'_>> = menus
        .iter()
        .map(|spec| MenuWork {
            spec,
            parent_path: root.to_path_buf(),
            parent_category: String::new(),
        })
        .collect();

    while let Some(work) = queue.pop_front() {
        let path = work.parent_path.join(&work.spec.name);
        if !path.exists() {
            fs::create_dir_all(&path).map_err(|e| MenuError::Io {
                message: "create menu directory".to_string(),
                path: Some(path.clone()),
                source: Some(e),
            })?;
            debug!("Created menu directory {}", path.display());
        }

        let category = category_key(&work.parent_category, work.spec.category_segment());
        category_map.insert(category.clone(), path.clone());

        for child in &work.spec.sub_menus {
            queue.push_back(MenuWork {
                spec: child,
                parent_path: path.clone(),
                parent_category: category.clone(),
            });
        }
    }

    Ok(category_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dev_menu() -> MenuSpec {
        MenuSpec::new("dev", "Development")
            .with_sub_menu(MenuSpec::new("tools", "Tools"))
            .with_sub_menu(MenuSpec::new("docs", "Docs").with_category("Reference"))
    }

    #[test]
    fn test_build_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let map = build_menus(temp_dir.path(), &[dev_menu()]).unwrap();

        let dev = temp_dir.path().join("Development");
        assert!(dev.is_dir());
        assert!(dev.join("Tools").is_dir());
        assert!(dev.join("Docs").is_dir());

        assert_eq!(map.len(), 3);
        assert_eq!(map.get("dev"), Some(dev.as_path()));
        assert_eq!(map.get("dev.tools"), Some(dev.join("Tools").as_path()));
        assert_eq!(map.get("dev.Reference"), Some(dev.join("Docs").as_path()));
    }

    #[test]
    fn test_build_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let first = build_menus(temp_dir.path(), &[dev_menu()]).unwrap();

        let marker = temp_dir.path().join("Development").join("keep.txt");
        fs::write(&marker, "user data").unwrap();

        let second = build_menus(temp_dir.path(), &[dev_menu()]).unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(&marker).unwrap(), "user data");
    }

    #[test]
    fn test_build_creates_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("nested").join("Applications");

        build_menus(&root, &[MenuSpec::new("games", "Games")]).unwrap();

        assert!(root.join("Games").is_dir());
    }

    #[test]
    fn test_sibling_collision_last_wins() {
        let temp_dir = TempDir::new().unwrap();
        let menus = [MenuSpec::new("dev", "Development"), MenuSpec::new("dev", "Dev Two")];

        let map = build_menus(temp_dir.path(), &menus).unwrap();

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("dev"), Some(temp_dir.path().join("Dev Two").as_path()));
        assert!(temp_dir.path().join("Development").is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_build_fails_when_path_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Development"), "").unwrap();

        let result = build_menus(
            temp_dir.path(),
            &[MenuSpec::new("dev", "Development").with_sub_menu(MenuSpec::new("tools", "Tools"))],
        );

        assert!(matches!(result, Err(MenuError::Io { .. })));
    }
}
