//! ae - Agent Extensions
//!
//! Installs a shared set of commands and skills into the directory layouts of
//! several AI coding agent tools, keeping one cached copy per scope and
//! linking every tool to it.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cache;
mod catalog;
mod cli;
mod commands;
mod common;
mod config;
mod domain;
mod error;
mod hash;
mod installer;
mod tool;
mod ui;

use cli::{Cli, Commands};
use commands::Context;
use error::Result;

/// Environment variable overriding the log filter
const LOG_ENV: &str = "AE_LOG";

fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "ae=debug" } else { "ae=warn" })
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Install(args) => {
            commands::install::run(&Context::load(cli.project, cli.source)?, &args)
        }
        Commands::Uninstall(args) => {
            commands::uninstall::run(&Context::load(cli.project, cli.source)?, &args)
        }
        Commands::List => commands::list::run(&Context::load(cli.project, cli.source)?),
        Commands::Doctor => commands::doctor::run(cli.project, cli.source),
        Commands::Update => commands::update::run(&Context::load(cli.project, cli.source)?),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(&args),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
