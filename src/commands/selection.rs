//! Tool and scope selection for install and uninstall

use crate::cli::ToolsArgs;
use crate::domain::Scope;
use crate::error::Result;
use crate::ui::prompt;

use super::Context;

/// What the user chose to operate on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub tools: Vec<String>,
    pub scope: Scope,
}

/// Take tools and scope from flags, prompting for whatever is missing
///
/// Returns `None` when a prompt was cancelled or no tool was picked. Tool keys
/// given as flags are not checked here; unknown ones are reported per tool.
pub fn select(ctx: &Context, args: &ToolsArgs, message: &str) -> Result<Option<Selection>> {
    let scope = args.scope.as_deref().map(str::parse::<Scope>).transpose()?;

    let tools = if args.tools.is_empty() {
        prompt::choose_tools(message, ctx.catalog.tool_keys())?
    } else {
        args.tools.clone()
    };
    if tools.is_empty() {
        return Ok(None);
    }

    let scope = match scope {
        Some(scope) => scope,
        None => match prompt::choose_scope()? {
            Some(scope) => scope,
            None => return Ok(None),
        },
    };

    Ok(Some(Selection { tools, scope }))
}
