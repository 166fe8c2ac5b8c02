use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

use crate::export::{Progress, ProgressSink};

/// Terminal progress bar for a running export.
///
/// Hidden in quiet mode or when stderr is not a TTY. Positions are percentages;
/// the slow-export warning only replaces the message.
#[derive(Clone)]
pub struct ProgressBarSink {
    progress_bar: ProgressBar,
}

impl ProgressBarSink {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(quiet, is_tty)
    }

    fn new_with_visibility(quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar()
        };
        Self { progress_bar }
    }

    fn create_visible_progress_bar() -> ProgressBar {
        let pb = ProgressBar::new(100);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} Exporting [{bar:40.cyan/blue}] {pos}% {msg}")
        {
            pb.set_style(style.progress_chars("█▓░"));
        }
        pb
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.progress_bar.position()
    }

    #[must_use]
    pub fn message(&self) -> String {
        self.progress_bar.message()
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl ProgressSink for ProgressBarSink {
    fn report(&self, progress: Progress, message: &str) {
        match progress {
            Progress::Percent(percent) => {
                self.progress_bar.set_position(u64::from(percent));
                self.progress_bar.set_message(message.to_string());
            }
            Progress::SlowWarning => {
                self.progress_bar.set_message(format!("{message}..."));
            }
        }
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
