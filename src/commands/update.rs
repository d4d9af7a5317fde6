//! Update command implementation

use crate::domain::InstallResult;
use crate::error::Result;
use crate::installer::Installer;
use crate::ui::{self, SummaryLine};

use super::Context;

/// Run update command
///
/// Reinstalls every tool at each location where it is currently installed,
/// rewriting the caches from the current source.
pub fn run(ctx: &Context) -> Result<()> {
    ui::title();
    ui::info(&format!("ae version {}", env!("CARGO_PKG_VERSION")));
    ui::info(&format!(
        "Extensions come from {}. Update the ae binary or the source directory to get new ones.",
        ctx.catalog.source().describe()
    ));
    println!();
    ui::info("Refreshing installed extensions...");

    let results = Installer::new(&ctx.catalog, &ctx.config).update()?;

    let mut lines = Vec::new();
    for result in &results {
        lines.extend(
            result
                .errors
                .iter()
                .map(|e| SummaryLine::Warning(format!("{}: {e}", result.tool))),
        );
        lines.push(SummaryLine::Success(format!(
            "{} ({}): {} commands, {} skills",
            ctx.tool_name(&result.tool),
            result.scope,
            result.commands,
            result.skills
        )));
    }

    ui::summary(&lines, "No extensions currently installed");
    if !results.is_empty() {
        ui::success(&format!("Refreshed {} installation(s)", results.len()));
    }
    if results.iter().any(InstallResult::has_errors) {
        ui::warn("Some extensions could not be refreshed (run 'ae doctor' for details)");
    }
    Ok(())
}
