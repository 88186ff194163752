//! Filesystem access for the tree renderer
//!
//! Listing, entry kind and the two hidden-entry signals live here so the
//! renderer itself stays platform-agnostic.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// A single directory entry, read fresh from the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub name: String,
    /// True only for real directories; symlinks to directories are not descended into.
    pub is_dir: bool,
}

impl Entry {
    /// Whether this entry is hidden by name or by platform attribute.
    pub fn is_hidden(&self) -> bool {
        is_dot_hidden(&self.name) || has_hidden_attribute(&self.path)
    }
}

/// List the direct children of `dir` in filesystem order.
///
/// Any failure, including one on a single entry, fails the whole listing.
pub fn read_entries(dir: &Path) -> Result<Vec<Entry>> {
    let read_dir = std::fs::read_dir(dir).map_err(|e| Error::read_dir(dir, e))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| Error::read_dir(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::read_dir(&path, e))?;
        entries.push(Entry {
            name: entry.file_name().to_string_lossy().to_string(),
            is_dir: file_type.is_dir(),
            path,
        });
    }
    Ok(entries)
}

/// Name shown for `path`: its last component, or the path itself when it has none.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Dot-prefixed names are hidden. `.` and `..` never are.
pub fn is_dot_hidden(name: &str) -> bool {
    name.starts_with('.') && name != "." && name != ".."
}

/// Platform hidden attribute. Only Windows has one.
#[cfg(windows)]
pub fn has_hidden_attribute(path: &Path) -> bool {
    use std::os::windows::fs::MetadataExt;

    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;

    std::fs::symlink_metadata(path)
        .map(|m| m.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0)
        .unwrap_or(false)
}

#[cfg(not(windows))]
pub fn has_hidden_attribute(_path: &Path) -> bool {
    false
}

/// Whether `path` is hidden, judged by its final component and platform attribute.
pub fn is_hidden(path: &Path) -> bool {
    let dot_hidden = match path.components().next_back() {
        Some(Component::Normal(name)) => is_dot_hidden(&name.to_string_lossy()),
        _ => false,
    };
    dot_hidden || has_hidden_attribute(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_dot_hidden() {
        assert!(is_dot_hidden(".hidden.txt"));
        assert!(is_dot_hidden(".git"));
        assert!(!is_dot_hidden("visible.txt"));
        assert!(!is_dot_hidden("not.hidden"));
        assert!(!is_dot_hidden("."));
        assert!(!is_dot_hidden(".."));
    }

    #[test]
    fn test_is_hidden_uses_last_component() {
        assert!(is_hidden(Path::new("/tmp/project/.config")));
        assert!(!is_hidden(Path::new("/tmp/.cache/project")));
        assert!(!is_hidden(Path::new(".")));
        assert!(!is_hidden(Path::new("..")));
        assert!(!is_hidden(Path::new("/")));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/home/user/myFolder")), "myFolder");
        assert_eq!(display_name(Path::new("relative/dir")), "dir");
        assert_eq!(display_name(Path::new("/")), "/");
    }

    #[test]
    fn test_read_entries_lists_files_and_dirs() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join(".dot"), "").unwrap();

        let mut entries = read_entries(dir.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec![".dot", "a.txt", "sub"]);
        assert!(!entries[1].is_dir);
        assert!(entries[2].is_dir);
        assert!(entries[0].is_hidden());
        assert!(!entries[1].is_hidden());
    }

    #[test]
    fn test_read_entries_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");
        let err = read_entries(&missing).unwrap_err();
        assert!(matches!(err, Error::ReadDir { ref path, .. } if *path == missing));
    }

    #[test]
    #[cfg(unix)]
    fn test_symlinked_dir_is_not_a_dir_entry() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

        let entries = read_entries(dir.path()).unwrap();
        let link = entries.iter().find(|e| e.name == "link").unwrap();
        assert!(!link.is_dir);
    }
}
