//! Artifact catalog
//!
//! The catalog pairs the tool registry with an [`ArtifactSource`], the place
//! commands and skills are read from. Two sources exist:
//! - [`EmbeddedSource`]: content compiled into the binary (the default)
//! - [`DirSource`]: the same layout on disk, used with `--source` and in tests
//!
//! Source layout:
//!
//! ```text
//! tools.yaml
//! commands/<name>.md
//! skills/<name>/SKILL.md
//! skills/<name>/...
//! ```

use std::path::{Path, PathBuf};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::tool::{Tool, ToolLoader, ToolRegistry};

pub mod dir;
pub mod embedded;

pub use dir::DirSource;
pub use embedded::EmbeddedSource;

/// File name of a skill's manifest
pub const SKILL_MANIFEST: &str = "SKILL.md";

/// Read access to commands and skills
pub trait ArtifactSource {
    /// Human-readable origin, e.g. "embedded" or a directory path
    fn describe(&self) -> String;

    /// Raw built-in `tools.yaml`
    fn tools_manifest(&self) -> Result<String>;

    /// Command names, sorted
    fn commands(&self) -> Vec<String>;

    /// Skill names, sorted
    fn skills(&self) -> Vec<String>;

    fn read_command(&self, name: &str) -> Result<Vec<u8>>;

    fn skill_tree(&self, name: &str) -> Result<SkillTree>;

    fn command_exists(&self, name: &str) -> bool {
        self.commands().iter().any(|c| c == name)
    }

    fn skill_exists(&self, name: &str) -> bool {
        self.skills().iter().any(|s| s == name)
    }
}

/// Kind of a skill tree entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File(Vec<u8>),
}

/// A directory or file of a skill, relative to the skill root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Snapshot of a skill's file tree
///
/// Entries are sorted by path, so every directory precedes its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillTree {
    pub name: String,
    pub entries: Vec<TreeEntry>,
}

impl SkillTree {
    pub fn new(name: impl Into<String>, mut entries: Vec<TreeEntry>) -> Self {
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Files with their contents
    pub fn files(&self) -> impl Iterator<Item = (&Path, &[u8])> {
        self.entries.iter().filter_map(|entry| match &entry.kind {
            EntryKind::File(contents) => Some((entry.path.as_path(), contents.as_slice())),
            EntryKind::Dir => None,
        })
    }

    /// Contents of the top-level `SKILL.md`, if present
    #[cfg(test)]
    pub fn manifest(&self) -> Option<&[u8]> {
        self.files()
            .find(|(path, _)| *path == Path::new(SKILL_MANIFEST))
            .map(|(_, contents)| contents)
    }
}

/// Tool registry plus artifact source
pub struct Catalog {
    tools: ToolRegistry,
    source: Box<dyn ArtifactSource>,
}

impl Catalog {
    pub fn new(tools: Vec<Tool>, source: Box<dyn ArtifactSource>) -> Self {
        Self {
            tools: ToolRegistry::new(tools),
            source,
        }
    }

    /// Load tool definitions from the source's `tools.yaml` and any overrides
    pub fn load(source: Box<dyn ArtifactSource>, config: &EngineConfig) -> Result<Self> {
        let manifest = source.tools_manifest()?;
        let tools = ToolLoader::new(config).load(&manifest)?;
        tracing::debug!(
            source = %source.describe(),
            tools = tools.len(),
            "catalog loaded"
        );
        Ok(Self::new(tools, source))
    }

    pub fn tool(&self, key: &str) -> Option<&Tool> {
        self.tools.get(key)
    }

    pub fn tool_keys(&self) -> Vec<String> {
        self.tools.keys()
    }

    pub fn tools(&self) -> &[Tool] {
        self.tools.all()
    }

    pub fn source(&self) -> &dyn ArtifactSource {
        self.source.as_ref()
    }

    pub fn commands(&self) -> Vec<String> {
        self.source.commands()
    }

    pub fn skills(&self) -> Vec<String> {
        self.source.skills()
    }
}
