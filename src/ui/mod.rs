use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while the DescribeInstances call is in flight.
///
/// Draws on stderr, so quiet-mode stdout stays machine-readable.
pub fn query_spinner(region: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Querying instances in {}...", region));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
