//! Search job endpoints.
//!
//! # What this module handles:
//! - Search job creation, status, cancellation and results
//! - Polling a job to completion with progress reporting
//!
//! # What this module does NOT handle:
//! - High-level search orchestration (see [`crate::client::search`])
//! - Result parsing beyond JSON deserialization

pub mod jobs;

pub use jobs::{
    cancel_job, create_job, get_job_status, get_results, wait_for_job_with_progress,
};
