//! Terminal presentation layer
//!
//! This module handles:
//! - Styled status lines (success, warning, error, info)
//! - Interactive prompts using inquire (via prompt module)
//! - Progress reporting while installing (via progress module)

use console::Style;

pub mod progress;
pub mod prompt;

/// Banner shown at the start of install, uninstall and update
pub fn title() {
    println!(
        "\n  {}  {}\n",
        Style::new().bold().magenta().apply_to("ae"),
        Style::new().dim().apply_to("agent extensions")
    );
}

pub fn header(text: &str) {
    println!("{}", Style::new().bold().apply_to(text));
}

pub fn success(text: &str) {
    println!("{} {}", Style::new().green().apply_to("✓"), text);
}

pub fn warn(text: &str) {
    println!("{} {}", Style::new().yellow().apply_to("!"), text);
}

pub fn error(text: &str) {
    println!("{} {}", Style::new().red().apply_to("✗"), text);
}

pub fn info(text: &str) {
    println!("{} {}", Style::new().cyan().apply_to("•"), text);
}

/// One line of a command summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryLine {
    Success(String),
    Warning(String),
    Failure(String),
}

/// Print summary lines, or `empty` when there are none
pub fn summary(lines: &[SummaryLine], empty: &str) {
    println!();
    if lines.is_empty() {
        info(empty);
    }
    for line in lines {
        match line {
            SummaryLine::Success(text) => success(text),
            SummaryLine::Warning(text) => warn(text),
            SummaryLine::Failure(text) => error(text),
        }
    }
    println!();
}

