//! Engine configuration
//!
//! Resolved absolute paths the installer works against. They are computed once
//! by the CLI and passed into the engine; nothing below this layer looks up the
//! home directory or the current directory on its own.

use std::path::{Path, PathBuf};

use crate::domain::Location;
use crate::error::{AeError, Result, io_error};

/// Name of the directory holding the cache under a scope root
pub const AGENTS_DIR: &str = ".agents";

/// Name of the cache directory inside [`AGENTS_DIR`]
pub const CACHE_DIR: &str = "ae";

/// Project-level tool definition overrides, relative to the project root
pub const PROJECT_TOOLS_FILE: &str = "ae-tools.yaml";

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Root for global installs and the `~` placeholder in tool definitions
    pub home: PathBuf,

    /// Root for local installs
    pub project_root: PathBuf,

    /// User configuration directory (e.g. `~/.config`), if the platform has one
    pub config_dir: Option<PathBuf>,
}

impl EngineConfig {
    pub fn new(home: impl Into<PathBuf>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            project_root: project_root.into(),
            config_dir: None,
        }
    }

    pub fn with_config_dir(mut self, config_dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(config_dir.into());
        self
    }

    /// Build the configuration from the process environment
    ///
    /// `project` defaults to the current directory.
    pub fn from_env(project: Option<PathBuf>) -> Result<Self> {
        let home = dirs::home_dir().ok_or(AeError::HomeDirNotFound)?;

        let project = match project {
            Some(path) => path,
            None => std::env::current_dir()
                .map_err(|e| io_error(format!("Failed to get current directory: {e}")))?,
        };
        let project_root = dunce::canonicalize(&project)
            .map_err(|e| io_error(format!("Invalid project directory {}: {e}", project.display())))?;

        let config = Self::new(home, project_root);
        Ok(match dirs::config_dir() {
            Some(dir) => config.with_config_dir(dir),
            None => config,
        })
    }

    /// Scope root for a location: the home directory or the project root
    pub fn scope_root(&self, location: Location) -> &Path {
        match location {
            Location::Global => &self.home,
            Location::Local => &self.project_root,
        }
    }

    /// `<scope-root>/.agents`, the highest directory cache pruning may remove
    pub fn agents_dir(&self, location: Location) -> PathBuf {
        self.scope_root(location).join(AGENTS_DIR)
    }

    /// `<scope-root>/.agents/ae`
    pub fn cache_dir(&self, location: Location) -> PathBuf {
        self.agents_dir(location).join(CACHE_DIR)
    }

    /// `<config_dir>/ae/tools.yaml`
    pub fn global_tools_file(&self) -> Option<PathBuf> {
        self.config_dir
            .as_ref()
            .map(|dir| dir.join("ae").join("tools.yaml"))
    }

    /// `<project>/ae-tools.yaml`
    pub fn project_tools_file(&self) -> PathBuf {
        self.project_root.join(PROJECT_TOOLS_FILE)
    }
}
