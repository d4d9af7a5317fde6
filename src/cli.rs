//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// ae - Agent Extensions
///
/// Install shared commands and skills into AI coding agent tools.
#[derive(Parser, Debug)]
#[command(
    name = "ae",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Manage installation of commands and skills for AI coding agents",
    long_about = "ae keeps one cached copy of its commands and skills per scope \
                  (~/.agents/ae globally, .agents/ae in a project) and links every \
                  agent tool's expected paths to that cache.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  ae install\n    \
                  ae install --tools claude,opencode --scope global -y\n    \
                  ae uninstall -t cursor -s local\n    \
                  ae list\n    \
                  ae doctor"
)]
pub struct Cli {
    /// Project directory for local installs (defaults to current directory)
    #[arg(long, short = 'p', global = true)]
    pub project: Option<PathBuf>,

    /// Read commands, skills and tools.yaml from a directory instead of the built-in content
    #[arg(long, global = true, env = "AE_SOURCE", value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install extensions to agent tools
    Install(ToolsArgs),

    /// Uninstall extensions from agent tools
    Uninstall(ToolsArgs),

    /// List available extensions and tools
    List,

    /// Check installation health and diagnose issues
    Doctor,

    /// Refresh installed extensions
    Update,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Tool and scope selection shared by install and uninstall
#[derive(Args, Debug, Clone, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Choose tools and scope interactively:\n    ae install\n\n\
                  Install to two tools globally without confirmation:\n    ae install --tools claude,opencode --scope global -y\n\n\
                  Remove from the current project only:\n    ae uninstall -t claude -s local")]
pub struct ToolsArgs {
    /// Tools to operate on (comma-separated, e.g. claude,opencode)
    #[arg(long, short = 't', value_delimiter = ',', value_name = "TOOL")]
    pub tools: Vec<String>,

    /// Scope: global, local or both
    #[arg(long, short = 's')]
    pub scope: Option<String>,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for completions command
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    ae completions --shell bash > ~/.bash_completion.d/ae\n\n\
                  Generate zsh completions:\n    ae completions --shell zsh > ~/.zfunc/_ae\n\n\
                  Generate fish completions:\n    ae completions --shell fish > ~/.config/fish/completions/ae.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
