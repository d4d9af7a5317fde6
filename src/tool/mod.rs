//! Tool definitions
//!
//! This module handles:
//! - Tool definitions (Tool, Conventions, SkillShape)
//! - Loading and merging tool definitions (via loader module)
//! - Tool lookup by key (via registry module)
//!
//! A tool's conventions are path templates using the `{name}` placeholder,
//! e.g. `commands/{name}.md` or `skills/{name}/SKILL.md`, resolved relative to
//! the tool root for the location being installed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::domain::Location;

pub mod loader;
pub mod registry;

pub use loader::ToolLoader;
pub use registry::ToolRegistry;

/// Placeholder replaced with the artifact name in convention templates
pub const NAME_PLACEHOLDER: &str = "{name}";

/// How a tool expects skills to be delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillShape {
    /// The skill manifest is linked as one file, e.g. `skills/{name}.md`
    SingleFile,
    /// A real directory holding one link per skill file, e.g. `skills/{name}/SKILL.md`
    Directory,
}

impl SkillShape {
    /// Derive the shape from a skill template's tail
    pub fn infer(template: &str) -> Self {
        let tail = template.rsplit('/').next().unwrap_or(template);
        if tail == format!("{NAME_PLACEHOLDER}.md") {
            SkillShape::SingleFile
        } else {
            SkillShape::Directory
        }
    }
}

/// Path conventions of a tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conventions {
    /// Command template, e.g. `commands/{name}.md`
    pub commands: String,

    /// Skill template, e.g. `skills/{name}/SKILL.md`
    pub skills: String,

    pub skill_shape: SkillShape,
}

impl Conventions {
    /// Create conventions, inferring the skill shape from the skill template
    pub fn new(commands: impl Into<String>, skills: impl Into<String>) -> Self {
        let skills = skills.into();
        Self {
            commands: commands.into(),
            skill_shape: SkillShape::infer(&skills),
            skills,
        }
    }

    pub fn with_skill_shape(mut self, shape: SkillShape) -> Self {
        self.skill_shape = shape;
        self
    }

    /// Relative destination of a command
    pub fn command_path(&self, name: &str) -> PathBuf {
        render(&self.commands, name)
    }

    /// Relative destination of a skill's manifest
    pub fn skill_path(&self, name: &str) -> PathBuf {
        render(&self.skills, name)
    }

    /// Relative path of the entry a skill occupies under the tool root
    ///
    /// The linked file for single-file skills, the owned directory for
    /// directory-based skills.
    pub fn skill_entry(&self, name: &str) -> PathBuf {
        let path = self.skill_path(name);
        match self.skill_shape {
            SkillShape::SingleFile => path,
            SkillShape::Directory => path.parent().map(Path::to_path_buf).unwrap_or(path),
        }
    }
}

fn render(template: &str, name: &str) -> PathBuf {
    template
        .replace(NAME_PLACEHOLDER, name)
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect()
}

/// An agent tool that ae installs into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    /// Tool identifier (e.g., "claude", "opencode")
    pub key: String,

    /// Display name for the tool
    pub name: String,

    /// Absolute root for global installs, `~` already resolved
    pub global_root: PathBuf,

    /// Root for local installs, relative to the project root
    pub local_path: PathBuf,

    pub conventions: Conventions,
}

impl Tool {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        global_root: impl Into<PathBuf>,
        local_path: impl Into<PathBuf>,
        conventions: Conventions,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            global_root: global_root.into(),
            local_path: local_path.into(),
            conventions,
        }
    }

    /// Tool root for a location
    pub fn root(&self, location: Location, config: &EngineConfig) -> PathBuf {
        match location {
            Location::Global => self.global_root.clone(),
            Location::Local => config.project_root.join(&self.local_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_single_file_shape() {
        assert_eq!(SkillShape::infer("skills/{name}.md"), SkillShape::SingleFile);
        assert_eq!(SkillShape::infer("{name}.md"), SkillShape::SingleFile);
    }

    #[test]
    fn test_infer_directory_shape() {
        assert_eq!(
            SkillShape::infer("skills/{name}/SKILL.md"),
            SkillShape::Directory
        );
        assert_eq!(
            SkillShape::infer("skills/{name}-skill.md"),
            SkillShape::Directory
        );
    }

    #[test]
    fn test_command_path() {
        let conv = Conventions::new("prompts/{name}.md", "skills/{name}/SKILL.md");
        assert_eq!(
            conv.command_path("review"),
            PathBuf::from("prompts").join("review.md")
        );
    }

    #[test]
    fn test_skill_entry_per_shape() {
        let dir = Conventions::new("commands/{name}.md", "skills/{name}/SKILL.md");
        assert_eq!(dir.skill_entry("lint"), PathBuf::from("skills").join("lint"));

        let single = Conventions::new("commands/{name}.md", "skills/{name}.md");
        assert_eq!(
            single.skill_entry("lint"),
            PathBuf::from("skills").join("lint.md")
        );
    }

    #[test]
    fn test_explicit_shape_overrides_inference() {
        let conv = Conventions::new("commands/{name}.md", "skills/{name}/SKILL.md")
            .with_skill_shape(SkillShape::SingleFile);
        assert_eq!(conv.skill_shape, SkillShape::SingleFile);
        assert_eq!(
            conv.skill_entry("lint"),
            PathBuf::from("skills").join("lint").join("SKILL.md")
        );
    }

    #[test]
    fn test_tool_roots() {
        let config = EngineConfig::new("/home/u", "/work/p");
        let tool = Tool::new(
            "claude",
            "Claude Code",
            "/home/u/.claude",
            ".claude",
            Conventions::new("commands/{name}.md", "skills/{name}/SKILL.md"),
        );

        assert_eq!(
            tool.root(Location::Global, &config),
            PathBuf::from("/home/u/.claude")
        );
        assert_eq!(
            tool.root(Location::Local, &config),
            PathBuf::from("/work/p/.claude")
        );
    }
}
