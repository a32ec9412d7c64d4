//! Spinner shown on stderr while walking and reading.

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub(crate) struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Spinner is only drawn when enabled and stderr is a terminal.
    pub(crate) fn new(enabled: bool) -> Self {
        let bar = if enabled && Term::stderr().is_term() { Some(create_spinner()) } else { None };
        Self { bar }
    }

    pub(crate) fn set_message(&self, message: impl Into<String>) {
        if let Some(bar) = &self.bar {
            bar.set_message(message.into());
        }
    }

    pub(crate) fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
    }
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
