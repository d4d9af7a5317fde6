//! Install command implementation
//!
//! Installs every command and skill into each selected tool:
//! 1. Resolve tools and scope from flags or prompts
//! 2. Confirm unless `--yes`
//! 3. Run the installer per tool, collecting one summary line per tool and
//!    one warning line per artifact that failed

use crate::cli::ToolsArgs;
use crate::error::Result;
use crate::installer::Installer;
use crate::ui::{self, SummaryLine, prompt};

use super::Context;
use super::selection::select;

/// Run install command
pub fn run(ctx: &Context, args: &ToolsArgs) -> Result<()> {
    ui::title();

    let Some(selection) = select(ctx, args, "Select tools to install to:")? else {
        ui::warn("Installation cancelled");
        return Ok(());
    };

    if !args.yes {
        let message = format!(
            "Install {} commands and {} skills to {} tools ({})?",
            ctx.catalog.commands().len(),
            ctx.catalog.skills().len(),
            selection.tools.len(),
            selection.scope
        );
        if !prompt::confirm(&message)? {
            ui::warn("Installation cancelled");
            return Ok(());
        }
    }

    let installer = Installer::new(&ctx.catalog, &ctx.config);
    let total = selection.tools.len();
    let mut progress = ui::progress::reporter(total);
    let mut lines = Vec::new();

    for (index, key) in selection.tools.iter().enumerate() {
        progress.start_tool(key, index + 1, total);
        match installer.install(key, selection.scope) {
            Ok(result) => {
                lines.extend(
                    result
                        .errors
                        .iter()
                        .map(|e| SummaryLine::Warning(format!("{key}: {e}"))),
                );
                lines.push(SummaryLine::Success(format!(
                    "{}: {} commands, {} skills",
                    ctx.tool_name(key),
                    result.commands,
                    result.skills
                )));
            }
            Err(e) => lines.push(SummaryLine::Failure(format!("{key}: {e}"))),
        }
        progress.finish_tool();
    }
    progress.finish();

    ui::summary(&lines, "Nothing was installed");
    Ok(())
}
