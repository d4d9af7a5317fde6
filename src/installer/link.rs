//! Symlink synchronization between tool destinations and the cache
//!
//! Links always point at absolute cache paths. Whatever occupies a
//! destination is replaced, so a repeated install repairs hand-edited or
//! broken destinations.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::catalog::SKILL_MANIFEST;
use crate::common::fs::{ensure_parent_dir, is_symlink, remove_entry, remove_path};
use crate::error::{Result, file_read_failed, file_write_failed, manifest_missing, symlink_failed};
use crate::tool::SkillShape;

#[cfg(unix)]
fn symlink(source: &Path, dest: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(source, dest)
}

#[cfg(windows)]
fn symlink(source: &Path, dest: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(source, dest)
}

/// Point `dest` at `source`, replacing anything already at `dest`
pub fn link(source: &Path, dest: &Path) -> Result<()> {
    ensure_parent_dir(dest)?;
    remove_entry(dest).map_err(|e| symlink_failed(dest, source, e))?;
    symlink(source, dest).map_err(|e| symlink_failed(dest, source, e))?;
    tracing::debug!(link = %dest.display(), target = %source.display(), "linked");
    Ok(())
}

/// Link a cached skill at `dest`, the resolved skill path of the tool
pub fn link_skill(shape: SkillShape, cached: &Path, dest: &Path) -> Result<()> {
    match shape {
        SkillShape::SingleFile => link_single_file_skill(cached, dest),
        SkillShape::Directory => match dest.parent() {
            Some(dir) => link_skill_dir(cached, dir),
            None => link_skill_dir(cached, dest),
        },
    }
}

fn link_single_file_skill(cached: &Path, dest: &Path) -> Result<()> {
    let manifest = cached.join(SKILL_MANIFEST);
    if !manifest.is_file() {
        return Err(manifest_missing(cached.display().to_string()));
    }
    link(&manifest, dest)
}

/// Mirror the cached skill tree into `dest_dir` with one link per file
fn link_skill_dir(cached: &Path, dest_dir: &Path) -> Result<()> {
    ensure_real_dir(dest_dir)?;
    remove_broken_links(dest_dir)?;

    for entry in WalkDir::new(cached).min_depth(1) {
        let entry = entry.map_err(|e| file_read_failed(cached, e))?;
        let relative = entry.path().strip_prefix(cached).unwrap_or(entry.path());
        let target = dest_dir.join(relative);

        if entry.file_type().is_dir() {
            ensure_real_dir(&target)?;
        } else {
            link(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Make `dir` a real directory, replacing a symlink or file in its place
fn ensure_real_dir(dir: &Path) -> Result<()> {
    if is_symlink(dir) || dir.is_file() {
        remove_path(dir)?;
    }
    fs::create_dir_all(dir).map_err(|e| file_write_failed(dir, e))
}

/// Remove dangling links under `dir` left behind by an older skill version
fn remove_broken_links(dir: &Path) -> Result<()> {
    let broken: Vec<_> = WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path_is_symlink() && !e.path().exists())
        .map(walkdir::DirEntry::into_path)
        .collect();

    for path in broken {
        remove_path(&path)?;
        tracing::debug!(link = %path.display(), "removed broken link");
    }
    Ok(())
}

/// Remove a destination entry, a link or a skill directory
///
/// Returns whether something was removed.
pub fn unlink(dest: &Path) -> Result<bool> {
    let removed = remove_path(dest)?;
    if removed {
        tracing::debug!(path = %dest.display(), "unlinked");
    }
    Ok(removed)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::common::fs::write_file;
    use tempfile::TempDir;

    #[test]
    fn test_link_replaces_existing_file() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("cache/a.md");
        write_file(&source, b"cached").unwrap();
        let dest = temp.path().join("tool/commands/a.md");
        write_file(&dest, b"stale copy").unwrap();

        link(&source, &dest).unwrap();

        assert!(is_symlink(&dest));
        assert_eq!(fs::read_link(&dest).unwrap(), source);
        assert_eq!(fs::read(&dest).unwrap(), b"cached");
    }

    #[test]
    fn test_link_replaces_directory() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("cache/a.md");
        write_file(&source, b"cached").unwrap();
        let dest = temp.path().join("tool/a.md");
        write_file(&dest.join("inner.md"), b"x").unwrap();

        link(&source, &dest).unwrap();
        assert!(is_symlink(&dest));
    }

    #[test]
    fn test_single_file_skill_requires_manifest() {
        let temp = TempDir::new().unwrap();
        let cached = temp.path().join("cache/skills/lint");
        fs::create_dir_all(&cached).unwrap();
        let dest = temp.path().join("tool/skills/lint.md");

        let err = link_skill(SkillShape::SingleFile, &cached, &dest).unwrap_err();
        assert!(matches!(
            err,
            crate::error::AeError::SkillManifestMissing { .. }
        ));
        assert!(!dest.exists());
    }

    #[test]
    fn test_directory_skill_mirrors_tree() {
        let temp = TempDir::new().unwrap();
        let cached = temp.path().join("cache/skills/lint");
        write_file(&cached.join("SKILL.md"), b"# Lint").unwrap();
        write_file(&cached.join("refs/rules.md"), b"rules").unwrap();
        let dest = temp.path().join("tool/skills/lint/SKILL.md");

        link_skill(SkillShape::Directory, &cached, &dest).unwrap();

        let dir = temp.path().join("tool/skills/lint");
        assert!(!is_symlink(&dir));
        assert!(!is_symlink(&dir.join("refs")));
        assert!(is_symlink(&dir.join("SKILL.md")));
        assert_eq!(fs::read(dir.join("refs/rules.md")).unwrap(), b"rules");
    }

    #[test]
    fn test_directory_skill_replaces_symlinked_dir() {
        let temp = TempDir::new().unwrap();
        let cached = temp.path().join("cache/skills/lint");
        write_file(&cached.join("SKILL.md"), b"# Lint").unwrap();
        let dir = temp.path().join("tool/skills/lint");
        fs::create_dir_all(dir.parent().unwrap()).unwrap();
        std::os::unix::fs::symlink(&cached, &dir).unwrap();

        link_skill(SkillShape::Directory, &cached, &dir.join("SKILL.md")).unwrap();

        assert!(!is_symlink(&dir));
        assert!(is_symlink(&dir.join("SKILL.md")));
        assert!(cached.join("SKILL.md").is_file());
    }

    #[test]
    fn test_directory_skill_drops_broken_links() {
        let temp = TempDir::new().unwrap();
        let cached = temp.path().join("cache/skills/lint");
        write_file(&cached.join("SKILL.md"), b"# Lint").unwrap();
        let dir = temp.path().join("tool/skills/lint");
        fs::create_dir_all(&dir).unwrap();
        std::os::unix::fs::symlink(cached.join("gone.md"), dir.join("gone.md")).unwrap();

        link_skill(SkillShape::Directory, &cached, &dir.join("SKILL.md")).unwrap();

        assert!(!crate::common::fs::entry_exists(&dir.join("gone.md")));
        assert!(dir.join("SKILL.md").exists());
    }

    #[test]
    fn test_unlink() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("a.md");
        assert!(!unlink(&dest).unwrap());

        std::os::unix::fs::symlink(temp.path().join("nowhere"), &dest).unwrap();
        assert!(unlink(&dest).unwrap());
        assert!(!crate::common::fs::entry_exists(&dest));
    }
}
