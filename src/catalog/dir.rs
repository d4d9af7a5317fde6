//! Artifact content read from a directory on disk

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::common::fs::list_names;

use super::{ArtifactSource, EntryKind, SkillTree, TreeEntry};
use crate::error::{
    Result, command_not_found, config_read_failed, file_read_failed, skill_not_found,
};

/// A source directory laid out like the embedded content
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn command_file(&self, name: &str) -> PathBuf {
        self.root.join("commands").join(format!("{name}.md"))
    }

    fn skill_dir(&self, name: &str) -> PathBuf {
        self.root.join("skills").join(name)
    }
}

impl ArtifactSource for DirSource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn tools_manifest(&self) -> Result<String> {
        let path = self.root.join("tools.yaml");
        fs::read_to_string(&path)
            .map_err(|e| config_read_failed(path.display().to_string(), e))
    }

    fn commands(&self) -> Vec<String> {
        list_names(&self.root.join("commands"), |entry| {
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
                path.file_stem().and_then(|s| s.to_str()).map(str::to_string)
            } else {
                None
            }
        })
    }

    fn skills(&self) -> Vec<String> {
        list_names(&self.root.join("skills"), |entry| {
            if entry.path().is_dir() {
                entry.file_name().to_str().map(str::to_string)
            } else {
                None
            }
        })
    }

    fn command_exists(&self, name: &str) -> bool {
        self.command_file(name).is_file()
    }

    fn skill_exists(&self, name: &str) -> bool {
        self.skill_dir(name).is_dir()
    }

    fn read_command(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.command_file(name);
        fs::read(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                command_not_found(name)
            } else {
                file_read_failed(&path, e)
            }
        })
    }

    fn skill_tree(&self, name: &str) -> Result<SkillTree> {
        let root = self.skill_dir(name);
        if !root.is_dir() {
            return Err(skill_not_found(name));
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(&root).min_depth(1).follow_links(true) {
            let entry = entry.map_err(|e| file_read_failed(&root, e))?;
            let path = entry.path();
            let relative = path.strip_prefix(&root).unwrap_or(path).to_path_buf();

            let kind = if entry.file_type().is_dir() {
                EntryKind::Dir
            } else {
                EntryKind::File(fs::read(path).map_err(|e| file_read_failed(path, e))?)
            };
            entries.push(TreeEntry {
                path: relative,
                kind,
            });
        }

        Ok(SkillTree::new(name, entries))
    }
}
