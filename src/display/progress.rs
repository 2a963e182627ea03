//! Progress bar shown while a batch is parsed.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a styled progress bar for file processing.
///
/// Draws to stderr, so it never mixes with report output on stdout.
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .map(|s| s.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// A bar that draws nothing, for runs without `--progress`.
pub fn hidden_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::hidden();
    pb.set_length(total);
    pb
}
