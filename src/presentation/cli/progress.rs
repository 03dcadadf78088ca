//! Progress reporting for CLI

use crate::domain::entities::Event;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner counting processed files
pub struct ProgressReporter {
    bar: ProgressBar,
    processed: u64,
    failed: u64,
}

impl ProgressReporter {
    /// Creates a visible spinner with `message` as its label
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
        {
            bar.set_style(style);
        }
        bar.enable_steady_tick(Duration::from_millis(120));
        bar.set_message(message.to_string());

        Self {
            bar,
            processed: 0,
            failed: 0,
        }
    }

    /// Creates a reporter that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            processed: 0,
            failed: 0,
        }
    }

    /// Counts a job event
    pub fn record(&mut self, event: &Event) {
        if let Some(job) = event.as_job() {
            self.processed += 1;
            if !job.is_success() {
                self.failed += 1;
            }
            self.bar.set_message(format!(
                "{} files processed, {} failed",
                self.processed, self.failed
            ));
        }
    }

    /// Prints a line above the spinner
    pub fn println(&self, line: impl AsRef<str>) {
        if self.bar.is_hidden() {
            println!("{}", line.as_ref());
        } else {
            self.bar.println(line);
        }
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn failed(&self) -> u64 {
        self.failed
    }

    /// Finishes with a message
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }
}
