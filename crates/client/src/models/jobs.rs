//! Search job models for the Splunk search API.
//!
//! # What this module handles:
//! - Search job status as returned by `/services/search/jobs/<sid>`
//! - The progress snapshot reported to callers while a job runs
//! - Search job results
//!
//! # What this module does NOT handle:
//! - Search execution logic (see [`crate::client::search`])
//! - HTTP transport (see [`crate::endpoints::search`])

use serde::Deserialize;

/// Dispatch states in which a job has not started producing progress yet.
const NOT_READY_STATES: [&str; 2] = ["QUEUED", "PARSING"];

/// Search job status (detailed).
#[derive(Debug, Deserialize, Clone)]
pub struct SearchJobStatus {
    #[serde(default)]
    pub sid: String,
    #[serde(
        default,
        rename = "isDone",
        deserialize_with = "crate::serde_helpers::bool_from_string_or_number"
    )]
    pub is_done: bool,
    #[serde(
        default,
        rename = "isFailed",
        deserialize_with = "crate::serde_helpers::bool_from_string_or_number"
    )]
    pub is_failed: bool,
    #[serde(
        default,
        rename = "doneProgress",
        deserialize_with = "crate::serde_helpers::f64_from_string_or_number"
    )]
    pub done_progress: f64,
    #[serde(
        default,
        rename = "resultCount",
        deserialize_with = "crate::serde_helpers::usize_from_string_or_number"
    )]
    pub result_count: usize,
    #[serde(default, rename = "dispatchState")]
    pub dispatch_state: Option<String>,
}

impl SearchJobStatus {
    /// A job is ready once it has left the `QUEUED`/`PARSING` dispatch states.
    pub fn is_ready(&self) -> bool {
        match self.dispatch_state.as_deref() {
            Some(state) => !NOT_READY_STATES.contains(&state),
            None => true,
        }
    }

    /// Snapshot handed to progress callbacks.
    pub fn progress(&self) -> JobProgress {
        JobProgress {
            done_progress: self.done_progress,
            result_count: self.result_count,
            is_done: self.is_done,
            dispatch_state: self.dispatch_state.clone(),
        }
    }
}

/// Progress of a running search job.
#[derive(Debug, Clone, PartialEq)]
pub struct JobProgress {
    /// Fraction complete, 0.0 to 1.0.
    pub done_progress: f64,
    /// Results produced so far.
    pub result_count: usize,
    pub is_done: bool,
    pub dispatch_state: Option<String>,
}

impl JobProgress {
    /// Percent complete, clamped to 0..=100.
    pub fn percent(&self) -> f64 {
        (self.done_progress * 100.0).clamp(0.0, 100.0)
    }
}

/// Search job results.
#[derive(Debug, Clone, Default)]
pub struct SearchJobResults {
    pub results: Vec<serde_json::Value>,
}
