//! Progress reporting for batch rendering

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Optional progress bar shown while rendering a batch of files
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter for a batch of the given size
    ///
    /// Quiet mode shows nothing, and so does a batch of one file; the
    /// bar only earns its screen space on real multi-file runs.
    pub fn for_files(total: usize, quiet: bool) -> Self {
        if quiet || total < 2 {
            return Self { bar: None };
        }

        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} [{elapsed}] {bar:30.green} {pos}/{len} files {msg}")
                .unwrap()
                .progress_chars("=> "),
        );
        bar.enable_steady_tick(Duration::from_millis(120));

        Self { bar: Some(bar) }
    }

    /// Record one finished file
    pub fn file_completed(&self, name: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(name.to_string());
            bar.inc(1);
        }
    }

    /// Close out the bar
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message("done");
        }
    }
}
