//! Terminal spinner that follows the pipeline steps.

use std::time::Duration;

use iconfont_core::Progress;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream};

pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    /// Spinner on stderr. indicatif stays silent when stderr is not a terminal.
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new_spinner())
    }

    /// Spinner that never draws.
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(pb: ProgressBar) -> Self {
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(style);
        pb.set_message("Starting...");
        pb.enable_steady_tick(Duration::from_millis(80));
        Self { pb }
    }

    /// Current spinner text.
    pub fn message(&self) -> String {
        self.pb.message()
    }

    /// Clear the spinner and print a green success line.
    pub fn succeed(self, message: &str) {
        self.pb.finish_and_clear();
        println!(
            "{} {}",
            "✔".if_supports_color(Stream::Stdout, |t| t.green()),
            message.if_supports_color(Stream::Stdout, |t| t.green())
        );
    }

    /// Clear the spinner and print a red failure line.
    pub fn fail(self, message: &str) {
        self.pb.finish_and_clear();
        eprintln!(
            "{} {}",
            "✖".if_supports_color(Stream::Stderr, |t| t.red()),
            message.if_supports_color(Stream::Stderr, |t| t.red())
        );
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for Spinner {
    fn step(&self, step: usize, total: usize, label: &str) {
        self.pb.set_message(format!("[{step}/{total}] {label}..."));
    }
}
