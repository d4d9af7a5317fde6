//! Common file system operations with unified error handling
//!
//! Every helper here looks at entries with `symlink_metadata`, so a symlink is
//! treated as itself and never followed into the tree it points to.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

use crate::error::{Result, file_write_failed, remove_failed};

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| file_write_failed(parent, e))?;
    }
    Ok(())
}

/// Write a file, creating parent directories
pub fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, contents).map_err(|e| file_write_failed(path, e))
}

/// Whether anything (including a broken symlink) exists at `path`
pub fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Whether `path` is a symlink, broken or not
pub fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink())
}

/// Sorted names of the entries in `dir` that `keep` maps to a name
///
/// A missing or unreadable directory lists as empty.
pub fn list_names(dir: &Path, keep: impl Fn(&fs::DirEntry) -> Option<String>) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries.filter_map(|e| e.ok()).filter_map(|e| keep(&e)).collect();
    names.sort();
    names
}

/// Remove whatever is at `path`: a real directory recursively, anything else
/// as a single entry
///
/// Returns `Ok(false)` when nothing was there.
pub fn remove_entry(path: &Path) -> io::Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };

    let removed = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        remove_link_or_file(path)
    };

    match removed {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// [`remove_entry`] with the error mapped for callers that report it
pub fn remove_path(path: &Path) -> Result<bool> {
    remove_entry(path).map_err(|e| remove_failed(path, e))
}

#[cfg(windows)]
fn remove_link_or_file(path: &Path) -> io::Result<()> {
    // Directory symlinks on Windows must be removed with remove_dir
    fs::remove_file(path).or_else(|_| fs::remove_dir(path))
}

#[cfg(not(windows))]
fn remove_link_or_file(path: &Path) -> io::Result<()> {
    fs::remove_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_parent_dir() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("subdir/nested/file.txt");

        ensure_parent_dir(&file_path).unwrap();
        assert!(file_path.parent().unwrap().is_dir());
    }

    #[test]
    fn test_write_file_creates_parents_and_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a/b/c.md");

        write_file(&path, b"one").unwrap();
        write_file(&path, b"two").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"two");
    }

    #[test]
    fn test_list_names_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        write_file(&temp.path().join("b.md"), b"").unwrap();
        write_file(&temp.path().join("a.md"), b"").unwrap();
        write_file(&temp.path().join("notes.txt"), b"").unwrap();

        let names = list_names(temp.path(), |entry| {
            let path = entry.path();
            (path.extension().is_some_and(|ext| ext == "md"))
                .then(|| path.file_stem().unwrap().to_string_lossy().into_owned())
        });
        assert_eq!(names, vec!["a", "b"]);
        assert!(list_names(&temp.path().join("missing"), |_| None).is_empty());
    }

    #[test]
    fn test_remove_entry_missing_is_false() {
        let temp = TempDir::new().unwrap();
        assert!(!remove_entry(&temp.path().join("nope")).unwrap());
    }

    #[test]
    fn test_remove_entry_directory_tree() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("tree");
        write_file(&dir.join("x/y.md"), b"y").unwrap();

        assert!(remove_entry(&dir).unwrap());
        assert!(!entry_exists(&dir));
    }

    #[cfg(unix)]
    #[test]
    fn test_remove_entry_does_not_follow_symlinks() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("target");
        write_file(&target.join("keep.md"), b"keep").unwrap();
        let link = temp.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert!(is_symlink(&link));
        assert!(remove_entry(&link).unwrap());
        assert!(!entry_exists(&link));
        assert!(target.join("keep.md").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_symlink_exists() {
        let temp = TempDir::new().unwrap();
        let link = temp.path().join("dangling");
        std::os::unix::fs::symlink(temp.path().join("gone"), &link).unwrap();

        assert!(entry_exists(&link));
        assert!(!link.exists());
        assert!(remove_entry(&link).unwrap());
    }
}
