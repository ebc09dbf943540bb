//! Attempt progress reporting
//!
//! Restarts are expected during normal operation, so the reporter surfaces
//! them as progress rather than warnings: a single spinner line tracking
//! the current attempt and how the previous ones ended.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static ATTEMPT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Single-line spinner tracking generation attempts
///
/// Quiet mode constructs no bar at all, so every method is a no-op.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter; `quiet` suppresses all output
    pub fn new(quiet: bool) -> Self {
        let bar = (!quiet).then(|| {
            let bar = ProgressBar::new_spinner();
            bar.set_style(ATTEMPT_STYLE.clone());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        });
        Self { bar }
    }

    /// Announce the start of an attempt
    pub fn attempt_started(&self, attempt: usize) {
        if let Some(bar) = &self.bar {
            bar.set_message(format!("attempt {attempt}: collapsing"));
        }
    }

    /// Record a discarded attempt and why it was discarded
    pub fn attempt_discarded(&self, attempt: usize, reason: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(format!("attempt {attempt} discarded ({reason}), restarting"));
        }
    }

    /// Close out the spinner with a final summary
    pub fn finish(&self, attempts: usize, iterations: usize) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(format!(
                "converged after {attempts} attempt(s), {iterations} iterations"
            ));
        }
    }
}
