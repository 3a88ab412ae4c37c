//! Progress indicators for search job waits.
//!
//! Responsibilities:
//! - Render a percent bar with the running result count while an app's
//!   listing job runs.
//! - Write only to STDERR so stdout keeps the run's progress lines and summary.
//! - Log every poll at `info` so runs without a terminal (where indicatif
//!   draws nothing) still record percent and result count.
//!
//! Non-responsibilities:
//! - Deciding when progress is shown; callers pass `enabled` (driven by `--quiet`).

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use splunk_client::JobProgress;
use tracing::info;

const BAR_TEMPLATE: &str = "{spinner} {msg} [{bar:40.cyan/blue}] {pos:>3}%";

/// A percent-based progress bar for one search job. No-op when disabled.
pub struct SearchProgress {
    label: String,
    pb: Option<ProgressBar>,
}

impl SearchProgress {
    /// `enabled` should be `!quiet`.
    pub fn new(enabled: bool, label: impl Into<String>) -> Self {
        let label = label.into();

        if !enabled {
            return Self { label, pb: None };
        }

        let pb = ProgressBar::new(100);
        pb.set_draw_target(ProgressDrawTarget::stderr());
        let style = ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        pb.set_style(style);
        pb.set_message(label.clone());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            label,
            pb: Some(pb),
        }
    }

    /// Apply one poll's progress snapshot.
    pub fn update(&self, progress: &JobProgress) {
        info!(
            label = %self.label,
            percent = progress.percent(),
            results = progress.result_count,
            state = %progress.dispatch_state.as_deref().unwrap_or("-"),
            "Search job progress"
        );

        let Some(pb) = &self.pb else {
            return;
        };

        pb.set_position(progress.percent().round() as u64);
        pb.set_message(format!(
            "{} ({} results)",
            self.label, progress.result_count
        ));
    }

    /// Finish with a stable line on STDERR.
    pub fn finish(&self) {
        let Some(pb) = &self.pb else {
            return;
        };

        pb.set_position(100);
        pb.finish_with_message(format!("{} done", self.label));
    }
}

impl Drop for SearchProgress {
    fn drop(&mut self) {
        // Clear an unfinished bar so it does not interleave with error output
        if let Some(pb) = &self.pb
            && !pb.is_finished()
        {
            pb.finish_and_clear();
        }
    }
}
