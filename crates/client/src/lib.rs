//! Splunk REST API client.
//!
//! This crate provides a typed async client for the parts of the Splunk
//! management API used to bulk-toggle scheduled searches: session login,
//! app listing, search jobs and saved search enable/disable. It supports
//! both session (username/password) and API token authentication.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod serde_helpers;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::{AuthStrategy, SessionManager};
pub use client::SplunkClient;
pub use client::builder::SplunkClientBuilder;
pub use client::search::ProgressCallback;
pub use endpoints::SavedSearchAction;
pub use error::{ClientError, Result};
pub use models::{App, JobProgress, SearchJobResults, SearchJobStatus};
