//! Tool definition loading and merging
//!
//! Tool definitions come from the `tools.yaml` shipped with the artifact
//! content and may be overridden per project and per user.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use super::{Conventions, NAME_PLACEHOLDER, SkillShape, Tool};
use crate::config::EngineConfig;
use crate::error::{
    Result, config_invalid, config_parse_failed, config_read_failed, tool_invalid,
};

/// `tools.yaml` document
#[derive(Debug, Default, Deserialize)]
struct ToolsFile {
    #[serde(default)]
    tools: BTreeMap<String, ToolDefinition>,
}

/// A tool as written in YAML, before `~` is resolved
#[derive(Debug, Clone, Deserialize)]
struct ToolDefinition {
    name: String,
    global_path: String,
    local_path: String,
    conventions: ConventionsDefinition,
}

#[derive(Debug, Clone, Deserialize)]
struct ConventionsDefinition {
    commands: String,
    skills: String,
    #[serde(default)]
    skill_shape: Option<SkillShape>,
}

/// Tool definition loader
pub struct ToolLoader<'a> {
    config: &'a EngineConfig,
}

impl<'a> ToolLoader<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Load tools from multiple sources
    ///
    /// Priority order (later sources override earlier ones):
    /// 1. Built-in `tools.yaml`
    /// 2. Project `ae-tools.yaml` (if exists)
    /// 3. User `<config_dir>/ae/tools.yaml` (if exists)
    pub fn load(&self, builtin: &str) -> Result<Vec<Tool>> {
        let mut definitions = parse_tools_yaml(builtin, "built-in tools.yaml")?;

        if let Some(project) = read_optional(&self.config.project_tools_file())? {
            definitions = merge_definitions(definitions, project);
        }

        if let Some(path) = self.config.global_tools_file() {
            if let Some(global) = read_optional(&path)? {
                definitions = merge_definitions(definitions, global);
            }
        }

        definitions
            .into_iter()
            .map(|(key, definition)| self.resolve(key, definition))
            .collect()
    }

    /// Validate a definition and turn it into a [`Tool`]
    fn resolve(&self, key: String, definition: ToolDefinition) -> Result<Tool> {
        if key.trim().is_empty() {
            return Err(config_invalid("tool key must not be empty"));
        }
        if definition.name.trim().is_empty() {
            return Err(tool_invalid(&key, "empty name"));
        }

        let conv = &definition.conventions;
        validate_template(&key, "commands", &conv.commands)?;
        validate_template(&key, "skills", &conv.skills)?;

        let skill_shape = conv
            .skill_shape
            .unwrap_or_else(|| SkillShape::infer(&conv.skills));
        if skill_shape == SkillShape::Directory && !owns_skill_dir(&conv.skills) {
            return Err(tool_invalid(
                &key,
                format!(
                    "directory skills need {NAME_PLACEHOLDER} in the directory part of '{}'",
                    conv.skills
                ),
            ));
        }

        let local_path = PathBuf::from(&definition.local_path);
        if local_path.is_absolute() || has_parent_dir(&local_path) {
            return Err(tool_invalid(
                &key,
                format!(
                    "local_path must be relative to the project, got '{}'",
                    definition.local_path
                ),
            ));
        }

        let global_root = expand_home(&definition.global_path, &self.config.home);
        if !global_root.is_absolute() {
            return Err(tool_invalid(
                &key,
                format!(
                    "global_path must be absolute or start with '~', got '{}'",
                    definition.global_path
                ),
            ));
        }

        let conventions = Conventions::new(conv.commands.clone(), conv.skills.clone())
            .with_skill_shape(skill_shape);

        Ok(Tool::new(
            key,
            definition.name,
            global_root,
            local_path,
            conventions,
        ))
    }
}

fn read_optional(path: &Path) -> Result<Option<BTreeMap<String, ToolDefinition>>> {
    if !path.exists() {
        return Ok(None);
    }

    let content =
        fs::read_to_string(path).map_err(|e| config_read_failed(path.display().to_string(), e))?;

    tracing::debug!(path = %path.display(), "loading tool overrides");
    parse_tools_yaml(&content, &path.display().to_string()).map(Some)
}

fn parse_tools_yaml(content: &str, origin: &str) -> Result<BTreeMap<String, ToolDefinition>> {
    let file: ToolsFile =
        serde_yaml::from_str(content).map_err(|e| config_parse_failed(origin, e))?;
    Ok(file.tools)
}

/// Later definitions replace earlier ones with the same key; new keys are added.
fn merge_definitions(
    mut base: BTreeMap<String, ToolDefinition>,
    overrides: BTreeMap<String, ToolDefinition>,
) -> BTreeMap<String, ToolDefinition> {
    base.extend(overrides);
    base
}

fn validate_template(key: &str, field: &str, template: &str) -> Result<()> {
    if !template.contains(NAME_PLACEHOLDER) {
        return Err(tool_invalid(
            key,
            format!("{field} template '{template}' must contain {NAME_PLACEHOLDER}"),
        ));
    }
    if template.starts_with('/') || template.split('/').any(|segment| segment == "..") {
        return Err(tool_invalid(
            key,
            format!("{field} template '{template}' must stay inside the tool root"),
        ));
    }
    Ok(())
}

/// Whether a directory-shaped skill template gives every skill its own directory
///
/// The engine replaces and removes the manifest's parent directory wholesale,
/// so that directory must be named after the skill.
fn owns_skill_dir(template: &str) -> bool {
    template
        .trim_matches('/')
        .rsplit_once('/')
        .is_some_and(|(dir, _)| dir.contains(NAME_PLACEHOLDER))
}

fn has_parent_dir(path: &Path) -> bool {
    path.components().any(|c| matches!(c, Component::ParentDir))
}

/// Resolve a leading `~` against the home directory
fn expand_home(path: &str, home: &Path) -> PathBuf {
    if path == "~" {
        home.to_path_buf()
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}
