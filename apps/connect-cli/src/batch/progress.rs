//! Progress reporting for batch operations
//!
//! Provides a progress bar wrapper for batch operations using indicatif.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

/// Progress indicator for batch operations
///
/// Draws on stderr so stdout stays pure JSON.
pub struct BatchProgress {
    bar: ProgressBar,
}

impl BatchProgress {
    /// Create a progress indicator, hidden unless `visible` and stderr is a terminal
    pub fn new(total: u64, operation: &str, visible: bool) -> Self {
        if !visible || !std::io::stderr().is_terminal() {
            return Self::hidden(total);
        }

        let bar = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░");
        bar.set_style(style);
        bar.set_message(format!("{operation} "));
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// A progress indicator that never draws
    pub fn hidden(total: u64) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total);
        Self { bar }
    }

    /// Increment the progress by one
    pub fn inc(&self) {
        self.bar.inc(1);
    }

    /// Items completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finish and clear the progress bar
    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_progress_counts() {
        let progress = BatchProgress::hidden(3);
        progress.inc();
        progress.inc();
        assert_eq!(progress.position(), 2);
        progress.finish_and_clear();
    }

    #[test]
    fn test_invisible_progress_is_hidden() {
        let progress = BatchProgress::new(2, "pause", false);
        progress.inc();
        assert_eq!(progress.position(), 1);
    }
}
