//! Interactive prompts

use inquire::{Confirm, MultiSelect, Select};

use crate::domain::Scope;
use crate::error::Result;

/// Ask for one or more tools; an empty result means the prompt was skipped
pub fn choose_tools(message: &str, keys: Vec<String>) -> Result<Vec<String>> {
    println!();
    let selection = MultiSelect::new(message, keys)
        .with_page_size(10)
        .with_help_message("  ↑↓ navigate  space select  enter confirm  type to filter  esc cancel")
        .prompt_skippable()?;
    Ok(selection.unwrap_or_default())
}

/// Ask for an installation scope; `None` when the prompt was skipped
pub fn choose_scope() -> Result<Option<Scope>> {
    let selection = Select::new("Select scope:", Scope::ALL.to_vec())
        .with_help_message("global: home directory  local: this project  both: each of them")
        .prompt_skippable()?;
    Ok(selection)
}

pub fn confirm(message: &str) -> Result<bool> {
    let confirmed = Confirm::new(message)
        .with_default(true)
        .with_help_message("Press Enter to confirm, or 'n' to cancel")
        .prompt()?;
    Ok(confirmed)
}
