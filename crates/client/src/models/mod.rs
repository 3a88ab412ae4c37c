//! Data models for Splunk API responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod apps;
pub mod common;
pub mod jobs;

pub use apps::{App, AppEntry, AppListResponse};
pub use common::{MessageType, SplunkMessage, SplunkMessages};
pub use jobs::{JobProgress, SearchJobResults, SearchJobStatus};
