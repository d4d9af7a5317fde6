//! Uninstall command implementation

use crate::cli::ToolsArgs;
use crate::error::Result;
use crate::installer::Installer;
use crate::ui::{self, SummaryLine, prompt};

use super::Context;
use super::selection::select;

/// Run uninstall command
///
/// Tools where nothing was removed get no summary line.
pub fn run(ctx: &Context, args: &ToolsArgs) -> Result<()> {
    ui::title();

    let Some(selection) = select(ctx, args, "Select tools to uninstall from:")? else {
        ui::warn("Uninstallation cancelled");
        return Ok(());
    };

    if !args.yes {
        let message = format!(
            "Uninstall {} commands and {} skills from {} tools ({})?",
            ctx.catalog.commands().len(),
            ctx.catalog.skills().len(),
            selection.tools.len(),
            selection.scope
        );
        if !prompt::confirm(&message)? {
            ui::warn("Uninstallation cancelled");
            return Ok(());
        }
    }

    let installer = Installer::new(&ctx.catalog, &ctx.config);
    let total = selection.tools.len();
    let mut progress = ui::progress::reporter(total);
    let mut lines = Vec::new();

    for (index, key) in selection.tools.iter().enumerate() {
        progress.start_tool(key, index + 1, total);
        match installer.uninstall(key, selection.scope) {
            Ok(result) => {
                lines.extend(
                    result
                        .errors
                        .iter()
                        .map(|e| SummaryLine::Warning(format!("{key}: {e}"))),
                );
                if result.total() > 0 {
                    lines.push(SummaryLine::Success(format!(
                        "{}: removed {} commands, {} skills",
                        ctx.tool_name(key),
                        result.commands,
                        result.skills
                    )));
                }
            }
            Err(e) => lines.push(SummaryLine::Failure(format!("{key}: {e}"))),
        }
        progress.finish_tool();
    }
    progress.finish();

    ui::summary(&lines, "Nothing to uninstall");
    Ok(())
}
