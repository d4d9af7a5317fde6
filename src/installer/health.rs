//! Installation status and health checks

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::Installer;
use crate::cache::{CacheStore, DriftKind, DriftReport, check_drift};
use crate::common::fs::{entry_exists, is_symlink};
use crate::domain::{Location, Subject};
use crate::error::Result;
use crate::tool::{SkillShape, Tool};

/// Sample artifact name used to find the directory a convention template writes into
const SAMPLE_NAME: &str = "sample";

/// Where a tool currently has an installation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallStatus {
    pub global: bool,
    pub local: bool,
}

impl InstallStatus {
    pub fn is_installed(self) -> bool {
        self.global || self.local
    }

    /// Installed locations in `[Global, Local]` order
    pub fn locations(self) -> Vec<Location> {
        let mut locations = Vec::new();
        if self.global {
            locations.push(Location::Global);
        }
        if self.local {
            locations.push(Location::Local);
        }
        locations
    }

    /// Two-column marker: `GL`, `G `, ` L` or blank
    pub fn marker(self) -> &'static str {
        match (self.global, self.local) {
            (true, true) => "GL",
            (true, false) => "G ",
            (false, true) => " L",
            (false, false) => "  ",
        }
    }
}

impl Installer<'_> {
    /// Where `key` has at least one resolving command or skill destination
    pub fn status(&self, key: &str) -> Result<InstallStatus> {
        let tool = self.tool(key)?;
        Ok(InstallStatus {
            global: self.installed_at(tool, Location::Global),
            local: self.installed_at(tool, Location::Local),
        })
    }

    fn installed_at(&self, tool: &Tool, location: Location) -> bool {
        let root = tool.root(location, self.config);
        let conventions = &tool.conventions;

        self.catalog
            .commands()
            .iter()
            .any(|name| root.join(conventions.command_path(name)).exists())
            || self
                .catalog
                .skills()
                .iter()
                .any(|name| root.join(conventions.skill_path(name)).exists())
    }

    /// Symlinks under the tool's command and skill directories that no longer resolve
    pub fn broken_links(&self, key: &str, location: Location) -> Result<Vec<PathBuf>> {
        let tool = self.tool(key)?;
        let root = tool.root(location, self.config);
        let conventions = &tool.conventions;

        let commands_dir = parent_or_root(&root, &conventions.command_path(SAMPLE_NAME));
        let mut broken = dangling_links(&commands_dir, 1);

        let skills_dir = parent_or_root(&root, &conventions.skill_entry(SAMPLE_NAME));
        let depth = match conventions.skill_shape {
            SkillShape::SingleFile => 1,
            SkillShape::Directory => usize::MAX,
        };
        broken.extend(dangling_links(&skills_dir, depth));

        broken.sort();
        broken.dedup();
        Ok(broken)
    }

    /// Cache entries at `location` that differ from the source, plus entries
    /// missing while some tool still links to them
    pub fn cache_drift(&self, location: Location) -> Result<Vec<DriftReport>> {
        let cache = CacheStore::for_location(self.config, location);
        let mut reports = check_drift(&cache, self.catalog.source())?;

        for name in self.catalog.commands() {
            let linked = self.catalog.tools().iter().any(|tool| {
                is_symlink(&tool.root(location, self.config).join(tool.conventions.command_path(&name)))
            });
            if linked && !entry_exists(&cache.command_path(&name)) {
                reports.push(DriftReport {
                    subject: Subject::Command(name),
                    kind: DriftKind::Missing,
                });
            }
        }

        for name in self.catalog.skills() {
            let linked = self.catalog.tools().iter().any(|tool| {
                entry_exists(&tool.root(location, self.config).join(tool.conventions.skill_entry(&name)))
            });
            if linked && !entry_exists(&cache.skill_dir(&name)) {
                reports.push(DriftReport {
                    subject: Subject::Skill(name),
                    kind: DriftKind::Missing,
                });
            }
        }

        Ok(reports)
    }
}

fn parent_or_root(root: &Path, relative: &Path) -> PathBuf {
    match relative.parent() {
        Some(parent) => root.join(parent),
        None => root.to_path_buf(),
    }
}

fn dangling_links(dir: &Path, max_depth: usize) -> Vec<PathBuf> {
    if !fs::symlink_metadata(dir).is_ok_and(|m| m.is_dir()) {
        return Vec::new();
    }

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path_is_symlink() && !e.path().exists())
        .map(walkdir::DirEntry::into_path)
        .collect()
}
