//! Doctor command implementation
//!
//! Reports on the catalog, tool roots, caches, dangling links and cache
//! drift. Problems are printed, never returned as errors.

use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::domain::Location;
use crate::error::Result;
use crate::installer::Installer;
use crate::ui;

use super::artifact_source;

const LOCATIONS: [Location; 2] = [Location::Global, Location::Local];

fn capitalized(location: Location) -> &'static str {
    match location {
        Location::Global => "Global",
        Location::Local => "Local",
    }
}

/// Run doctor command
pub fn run(project: Option<PathBuf>, source: Option<PathBuf>) -> Result<()> {
    ui::header("\n  Agent Extensions Doctor\n");

    let config = EngineConfig::from_env(project)?;
    let catalog = match Catalog::load(artifact_source(source), &config) {
        Ok(catalog) => catalog,
        Err(e) => {
            ui::error(&format!("Config: {e}"));
            return Ok(());
        }
    };
    ui::success(&format!(
        "Config: tools.yaml loaded ({})",
        catalog.source().describe()
    ));

    ui::header("\nTool Paths:");
    for tool in catalog.tools() {
        if tool.global_root.exists() {
            ui::success(&format!("{}: {} exists", tool.name, tool.global_root.display()));
        } else {
            ui::warn(&format!(
                "{}: {} not found (tool may not be installed)",
                tool.name,
                tool.global_root.display()
            ));
        }
    }

    ui::header("\nCache:");
    for location in LOCATIONS {
        let dir = config.cache_dir(location);
        if dir.exists() {
            ui::success(&format!("{} cache: {}", capitalized(location), dir.display()));
        } else {
            ui::info(&format!(
                "{} cache: not created yet ({})",
                capitalized(location),
                dir.display()
            ));
        }
    }

    let installer = Installer::new(&catalog, &config);

    ui::header("\nSymlink Health:");
    let mut broken = 0;
    for key in catalog.tool_keys() {
        for location in LOCATIONS {
            for link in installer.broken_links(&key, location)? {
                ui::warn(&format!("Broken symlink: {}", link.display()));
                broken += 1;
            }
        }
    }
    if broken == 0 {
        ui::success("No broken symlinks found");
    } else {
        ui::warn(&format!(
            "Found {broken} broken symlinks (run 'ae install' to fix)"
        ));
    }

    ui::header("\nCache Drift:");
    let mut drifted = 0;
    for location in LOCATIONS {
        for report in installer.cache_drift(location)? {
            ui::warn(&format!(
                "{} cache: {} {}",
                capitalized(location),
                report.subject,
                report.kind
            ));
            drifted += 1;
        }
    }
    if drifted == 0 {
        ui::success("Cached artifacts match the source");
    } else {
        ui::warn(&format!(
            "Found {drifted} drifted cache entries (run 'ae update' to refresh)"
        ));
    }

    println!();
    Ok(())
}
