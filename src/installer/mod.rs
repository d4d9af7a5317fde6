//! Installation and synchronization engine
//!
//! This module handles:
//! - Populating the per-scope cache from the artifact source
//! - Linking each tool's expected paths to the cache (via link module)
//! - Reversing installs and pruning emptied directories (via prune module)
//! - Installation status and health checks (via health module)
//!
//! Every artifact is processed independently: a failure is recorded in the
//! [`InstallResult`] and the remaining artifacts are still attempted. Only an
//! unknown tool fails a call, and it does so before anything is touched.

use std::path::Path;

use crate::cache::CacheStore;
use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::domain::{InstallResult, Location, Scope, Subject};
use crate::error::{Result, unknown_tool};
use crate::tool::Tool;

pub mod health;
pub mod link;
pub mod prune;

use link::{link, link_skill, unlink};
use prune::prune;

/// Installs and uninstalls catalog artifacts for tools
pub struct Installer<'a> {
    catalog: &'a Catalog,
    config: &'a EngineConfig,
}

impl<'a> Installer<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a EngineConfig) -> Self {
        Self { catalog, config }
    }

    fn tool(&self, key: &str) -> Result<&'a Tool> {
        self.catalog.tool(key).ok_or_else(|| unknown_tool(key))
    }

    /// Install every command and skill for `key` in each location of `scope`
    pub fn install(&self, key: &str, scope: Scope) -> Result<InstallResult> {
        let tool = self.tool(key)?;
        let mut result = InstallResult::new(key, scope);

        for location in scope.expand() {
            self.install_at(tool, location, &mut result);
        }

        tracing::info!(
            tool = key,
            %scope,
            commands = result.commands,
            skills = result.skills,
            errors = result.errors.len(),
            "install finished"
        );
        Ok(result)
    }

    fn install_at(&self, tool: &Tool, location: Location, result: &mut InstallResult) {
        let cache = CacheStore::for_location(self.config, location);
        let root = tool.root(location, self.config);
        tracing::debug!(tool = %tool.key, %location, root = %root.display(), "installing");

        if let Err(e) = cache.ensure_readme() {
            result.push_error(location, Subject::CacheReadme, e);
        }

        for name in self.catalog.commands() {
            match self.install_command(tool, &cache, &root, &name) {
                Ok(()) => result.commands += 1,
                Err(e) => result.push_error(location, Subject::Command(name), e),
            }
        }

        for name in self.catalog.skills() {
            match self.install_skill(tool, &cache, &root, &name) {
                Ok(()) => result.skills += 1,
                Err(e) => result.push_error(location, Subject::Skill(name), e),
            }
        }
    }

    fn install_command(&self, tool: &Tool, cache: &CacheStore, root: &Path, name: &str) -> Result<()> {
        let contents = self.catalog.source().read_command(name)?;
        let cached = cache.write_command(name, &contents)?;
        link(&cached, &root.join(tool.conventions.command_path(name)))
    }

    fn install_skill(&self, tool: &Tool, cache: &CacheStore, root: &Path, name: &str) -> Result<()> {
        let tree = self.catalog.source().skill_tree(name)?;
        let cached = cache.write_skill(&tree)?;
        link_skill(
            tool.conventions.skill_shape,
            &cached,
            &root.join(tool.conventions.skill_path(name)),
        )
    }

    /// Remove every command and skill of `key` from each location of `scope`
    ///
    /// Counts only what was actually removed; absent artifacts contribute zero.
    pub fn uninstall(&self, key: &str, scope: Scope) -> Result<InstallResult> {
        let tool = self.tool(key)?;
        let mut result = InstallResult::new(key, scope);

        for location in scope.expand() {
            self.uninstall_at(tool, location, &mut result);
        }

        tracing::info!(
            tool = key,
            %scope,
            commands = result.commands,
            skills = result.skills,
            errors = result.errors.len(),
            "uninstall finished"
        );
        Ok(result)
    }

    fn uninstall_at(&self, tool: &Tool, location: Location, result: &mut InstallResult) {
        let cache = CacheStore::for_location(self.config, location);
        let root = tool.root(location, self.config);
        tracing::debug!(tool = %tool.key, %location, root = %root.display(), "uninstalling");

        for name in self.catalog.commands() {
            let dest = root.join(tool.conventions.command_path(&name));
            match remove_destination(&dest, &root) {
                Ok(true) => result.commands += 1,
                Ok(false) => {}
                Err(e) => result.push_error(location, Subject::Command(name.clone()), e),
            }
            if let Err(e) = cache.remove_command(&name) {
                result.push_error(location, Subject::Command(name), e);
            }
        }

        for name in self.catalog.skills() {
            let dest = root.join(tool.conventions.skill_entry(&name));
            match remove_destination(&dest, &root) {
                Ok(true) => result.skills += 1,
                Ok(false) => {}
                Err(e) => result.push_error(location, Subject::Skill(name.clone()), e),
            }
            if let Err(e) = cache.remove_skill(&name) {
                result.push_error(location, Subject::Skill(name), e);
            }
        }

        prune(&cache.commands_dir(), cache.dir());
        prune(&cache.skills_dir(), cache.dir());
        prune(cache.dir(), &self.config.agents_dir(location));
    }

    /// Reinstall every tool wherever it currently has an installation
    pub fn update(&self) -> Result<Vec<InstallResult>> {
        let mut results = Vec::new();
        for key in self.catalog.tool_keys() {
            let status = self.status(&key)?;
            for location in status.locations() {
                results.push(self.install(&key, location.into())?);
            }
        }
        Ok(results)
    }
}

/// Remove a destination entry and prune what it leaves empty, up to `root`
fn remove_destination(dest: &Path, root: &Path) -> Result<bool> {
    let removed = unlink(dest)?;
    if removed {
        if let Some(parent) = dest.parent() {
            prune(parent, root);
        }
    }
    Ok(removed)
}
