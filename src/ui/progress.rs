//! Progress reporting for per-tool operations
//!
//! Commands report through the [`ProgressReporter`] trait so the bar can be
//! swapped for a silent reporter when stderr is not a terminal.

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter trait for install, uninstall and update runs
pub trait ProgressReporter {
    /// Show the tool currently being processed
    fn start_tool(&mut self, tool: &str, current: usize, total: usize);

    /// Mark the current tool as done
    fn finish_tool(&mut self);

    /// Clear the display once every tool is done
    fn finish(&mut self);
}

/// Progress bar over the selected tools
pub struct InteractiveProgressReporter {
    bar: ProgressBar,
}

impl InteractiveProgressReporter {
    pub fn new(total_tools: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bar = ProgressBar::new(total_tools);
        bar.set_style(style);
        Self { bar }
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start_tool(&mut self, tool: &str, current: usize, total: usize) {
        self.bar.set_message(format!("({current}/{total}) {tool}"));
    }

    fn finish_tool(&mut self) {
        self.bar.inc(1);
    }

    fn finish(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// No-op reporter for non-interactive runs
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start_tool(&mut self, _tool: &str, _current: usize, _total: usize) {}

    fn finish_tool(&mut self) {}

    fn finish(&mut self) {}
}

/// The bar when stderr is a terminal, silence otherwise
pub fn reporter(total_tools: usize) -> Box<dyn ProgressReporter> {
    if console::Term::stderr().is_term() {
        Box::new(InteractiveProgressReporter::new(total_tools as u64))
    } else {
        Box::new(SilentProgressReporter)
    }
}
