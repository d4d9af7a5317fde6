//! Command implementations for the ae CLI

use std::path::PathBuf;

use crate::catalog::{ArtifactSource, Catalog, DirSource, EmbeddedSource};
use crate::config::EngineConfig;
use crate::error::Result;

pub mod completions;
pub mod doctor;
pub mod install;
pub mod list;
pub mod selection;
pub mod uninstall;
pub mod update;
pub mod version;

/// Artifact source selected by `--source`
pub fn artifact_source(source: Option<PathBuf>) -> Box<dyn ArtifactSource> {
    match source {
        Some(dir) => Box::new(DirSource::new(dir)),
        None => Box::new(EmbeddedSource::new()),
    }
}

/// Engine configuration and catalog shared by the commands
pub struct Context {
    pub config: EngineConfig,
    pub catalog: Catalog,
}

impl Context {
    pub fn load(project: Option<PathBuf>, source: Option<PathBuf>) -> Result<Self> {
        let config = EngineConfig::from_env(project)?;
        let catalog = Catalog::load(artifact_source(source), &config)?;
        Ok(Self { config, catalog })
    }

    /// Display name of a tool, falling back to the key
    pub fn tool_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.catalog.tool(key).map_or(key, |tool| tool.name.as_str())
    }
}
