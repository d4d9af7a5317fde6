//! Artifact content compiled into the binary

use std::path::Path;

use include_dir::{Dir, include_dir};

use super::{ArtifactSource, EntryKind, SkillTree, TreeEntry};
use crate::error::{Result, command_not_found, config_read_failed, skill_not_found};

static CONTENT: Dir = include_dir!("$CARGO_MANIFEST_DIR/content");

/// The built-in commands, skills and tool definitions
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    pub fn new() -> Self {
        Self
    }
}

/// Sorted stems of markdown files
fn markdown_stems<'a>(paths: impl Iterator<Item = &'a Path>) -> Vec<String> {
    let mut names: Vec<String> = paths
        .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
        .filter_map(|p| p.file_stem().and_then(|s| s.to_str()))
        .map(str::to_string)
        .collect();
    names.sort();
    names
}

impl ArtifactSource for EmbeddedSource {
    fn describe(&self) -> String {
        "embedded".to_string()
    }

    fn tools_manifest(&self) -> Result<String> {
        CONTENT
            .get_file("tools.yaml")
            .and_then(|f| f.contents_utf8())
            .map(str::to_string)
            .ok_or_else(|| config_read_failed("tools.yaml", "missing from embedded content"))
    }

    fn commands(&self) -> Vec<String> {
        match CONTENT.get_dir("commands") {
            Some(dir) => markdown_stems(dir.files().map(|f| f.path())),
            None => Vec::new(),
        }
    }

    fn skills(&self) -> Vec<String> {
        match CONTENT.get_dir("skills") {
            Some(dir) => {
                let mut names: Vec<String> = dir
                    .dirs()
                    .filter_map(|d| d.path().file_name().and_then(|s| s.to_str()))
                    .map(str::to_string)
                    .collect();
                names.sort();
                names
            }
            None => Vec::new(),
        }
    }

    fn command_exists(&self, name: &str) -> bool {
        CONTENT.get_file(format!("commands/{name}.md")).is_some()
    }

    fn skill_exists(&self, name: &str) -> bool {
        CONTENT.get_dir(format!("skills/{name}")).is_some()
    }

    fn read_command(&self, name: &str) -> Result<Vec<u8>> {
        CONTENT
            .get_file(format!("commands/{name}.md"))
            .map(|f| f.contents().to_vec())
            .ok_or_else(|| command_not_found(name))
    }

    fn skill_tree(&self, name: &str) -> Result<SkillTree> {
        let root = CONTENT
            .get_dir(format!("skills/{name}"))
            .ok_or_else(|| skill_not_found(name))?;
        let base = root.path();

        let relative = |path: &Path| path.strip_prefix(base).unwrap_or(path).to_path_buf();

        let mut entries = Vec::new();
        let mut stack: Vec<&Dir<'_>> = vec![root];
        while let Some(dir) = stack.pop() {
            for file in dir.files() {
                entries.push(TreeEntry {
                    path: relative(file.path()),
                    kind: EntryKind::File(file.contents().to_vec()),
                });
            }
            for sub in dir.dirs() {
                entries.push(TreeEntry {
                    path: relative(sub.path()),
                    kind: EntryKind::Dir,
                });
                stack.push(sub);
            }
        }

        Ok(SkillTree::new(name, entries))
    }
}
