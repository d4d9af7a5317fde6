//! Artifact cache
//!
//! Every scope root holds one canonical copy of the artifacts that tool
//! destinations link to.
//!
//! ## Cache Structure
//!
//! ```text
//! <scope-root>/.agents/ae/
//! ├── README.md
//! ├── commands/
//! │   └── <name>.md
//! └── skills/
//!     └── <name>/
//!         ├── SKILL.md
//!         └── <mirrors the source tree>
//! ```
//!
//! The cache is shared by all tools installed at the same scope root.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{EntryKind, SkillTree};
use crate::common::fs::{remove_path, write_file};
use crate::config::EngineConfig;
use crate::domain::Location;
use crate::error::{Result, file_write_failed};

pub mod drift;

pub use drift::{DriftKind, DriftReport, check_drift};

/// Marker file name at the cache root
pub const README_FILE: &str = "README.md";

/// Commands subdirectory within the cache
pub const COMMANDS_DIR: &str = "commands";

/// Skills subdirectory within the cache
pub const SKILLS_DIR: &str = "skills";

/// Contents of the cache marker file
pub const CACHE_README: &str = "# Agent Extensions Cache

This folder is managed by ae and contains cached commands and skills.
Agent tools symlink to these files.

Do not delete this folder.
";

/// Cache directory of one scope root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The cache under `<scope-root>/.agents/ae`
    pub fn for_location(config: &EngineConfig, location: Location) -> Self {
        Self::new(config.cache_dir(location))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn readme_path(&self) -> PathBuf {
        self.dir.join(README_FILE)
    }

    pub fn commands_dir(&self) -> PathBuf {
        self.dir.join(COMMANDS_DIR)
    }

    pub fn skills_dir(&self) -> PathBuf {
        self.dir.join(SKILLS_DIR)
    }

    pub fn command_path(&self, name: &str) -> PathBuf {
        self.commands_dir().join(format!("{name}.md"))
    }

    pub fn skill_dir(&self, name: &str) -> PathBuf {
        self.skills_dir().join(name)
    }

    /// Write the marker file unless it already holds the expected text
    ///
    /// Returns whether the file was written.
    pub fn ensure_readme(&self) -> Result<bool> {
        let path = self.readme_path();
        if fs::read(&path).is_ok_and(|current| current == CACHE_README.as_bytes()) {
            return Ok(false);
        }

        write_file(&path, CACHE_README.as_bytes())?;
        tracing::debug!(path = %path.display(), "wrote cache readme");
        Ok(true)
    }

    /// Write a command's cache file, replacing any previous copy
    pub fn write_command(&self, name: &str, contents: &[u8]) -> Result<PathBuf> {
        let path = self.command_path(name);
        write_file(&path, contents)?;
        tracing::debug!(command = name, path = %path.display(), "cached command");
        Ok(path)
    }

    /// Replace a skill's cache directory with a copy of `tree`
    ///
    /// The old directory is removed first so files dropped from the skill do
    /// not linger in the cache.
    pub fn write_skill(&self, tree: &SkillTree) -> Result<PathBuf> {
        let dir = self.skill_dir(&tree.name);
        remove_path(&dir)?;
        fs::create_dir_all(&dir).map_err(|e| file_write_failed(&dir, e))?;

        for entry in &tree.entries {
            let path = dir.join(&entry.path);
            match &entry.kind {
                EntryKind::Dir => {
                    fs::create_dir_all(&path).map_err(|e| file_write_failed(&path, e))?;
                }
                EntryKind::File(contents) => write_file(&path, contents)?,
            }
        }

        tracing::debug!(
            skill = %tree.name,
            entries = tree.entries.len(),
            path = %dir.display(),
            "cached skill"
        );
        Ok(dir)
    }

    /// Remove a command's cache file; `Ok(false)` when it was not cached
    pub fn remove_command(&self, name: &str) -> Result<bool> {
        remove_path(&self.command_path(name))
    }

    /// Remove a skill's cache directory; `Ok(false)` when it was not cached
    pub fn remove_skill(&self, name: &str) -> Result<bool> {
        remove_path(&self.skill_dir(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TreeEntry;
    use tempfile::TempDir;

    fn tree(files: &[(&str, &str)]) -> SkillTree {
        SkillTree::new(
            "lint",
            files
                .iter()
                .map(|(path, contents)| TreeEntry {
                    path: PathBuf::from(path),
                    kind: EntryKind::File(contents.as_bytes().to_vec()),
                })
                .collect(),
        )
    }

    #[test]
    fn test_layout() {
        let config = EngineConfig::new("/home/u", "/work/p");
        let cache = CacheStore::for_location(&config, Location::Local);

        assert_eq!(cache.dir(), Path::new("/work/p/.agents/ae"));
        assert_eq!(
            cache.command_path("review"),
            PathBuf::from("/work/p/.agents/ae/commands/review.md")
        );
        assert_eq!(
            cache.skill_dir("lint"),
            PathBuf::from("/work/p/.agents/ae/skills/lint")
        );
    }

    #[test]
    fn test_ensure_readme_writes_once() {
        let temp = TempDir::new().unwrap();
        let cache = CacheStore::new(temp.path().join("ae"));

        assert!(cache.ensure_readme().unwrap());
        assert!(!cache.ensure_readme().unwrap());
        assert_eq!(
            fs::read_to_string(cache.readme_path()).unwrap(),
            CACHE_README
        );
    }

    #[test]
    fn test_ensure_readme_repairs_changed_content() {
        let temp = TempDir::new().unwrap();
        let cache = CacheStore::new(temp.path().join("ae"));
        write_file(&cache.readme_path(), b"edited").unwrap();

        assert!(cache.ensure_readme().unwrap());
        assert_eq!(
            fs::read_to_string(cache.readme_path()).unwrap(),
            CACHE_README
        );
    }

    #[test]
    fn test_write_and_remove_command() {
        let temp = TempDir::new().unwrap();
        let cache = CacheStore::new(temp.path());

        let path = cache.write_command("review", b"# Review").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"# Review");

        cache.write_command("review", b"# Review v2").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"# Review v2");

        assert!(cache.remove_command("review").unwrap());
        assert!(!cache.remove_command("review").unwrap());
    }

    #[test]
    fn test_write_skill_drops_stale_files() {
        let temp = TempDir::new().unwrap();
        let cache = CacheStore::new(temp.path());

        cache
            .write_skill(&tree(&[("SKILL.md", "v1"), ("refs/old.md", "old")]))
            .unwrap();
        let dir = cache.write_skill(&tree(&[("SKILL.md", "v2")])).unwrap();

        assert_eq!(fs::read_to_string(dir.join("SKILL.md")).unwrap(), "v2");
        assert!(!dir.join("refs").exists());
    }

    #[test]
    fn test_write_skill_keeps_empty_dirs() {
        let temp = TempDir::new().unwrap();
        let cache = CacheStore::new(temp.path());
        let skill = SkillTree::new(
            "lint",
            vec![
                TreeEntry {
                    path: PathBuf::from("SKILL.md"),
                    kind: EntryKind::File(b"m".to_vec()),
                },
                TreeEntry {
                    path: PathBuf::from("scratch"),
                    kind: EntryKind::Dir,
                },
            ],
        );

        let dir = cache.write_skill(&skill).unwrap();
        assert!(dir.join("scratch").is_dir());
        assert!(cache.remove_skill("lint").unwrap());
        assert!(!dir.exists());
    }
}
