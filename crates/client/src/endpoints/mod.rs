//! REST API endpoint implementations.
//!
//! Each function here performs one HTTP exchange (plus any retries) against
//! the management port and returns typed data. Authentication is passed in
//! as a ready-made `Authorization` header value.

mod apps;
mod auth;
mod request;
mod saved_searches;
pub mod search;
pub mod url_encoding;

pub use apps::list_apps;
pub use auth::login;
pub use request::send_request_with_retry;
pub use saved_searches::{SavedSearchAction, toggle_saved_search};
pub use search::{
    cancel_job, create_job, get_job_status, get_results, wait_for_job_with_progress,
};
pub use url_encoding::encode_path_segment;

use crate::error::{ClientError, Result};

/// Return `entry[0].content` from a standard Splunk Atom-style JSON response.
pub fn extract_entry_content(resp: &serde_json::Value) -> Result<&serde_json::Value> {
    resp.get("entry")
        .and_then(|entries| entries.get(0))
        .and_then(|entry| entry.get("content"))
        .ok_or_else(|| ClientError::InvalidResponse("Missing entry[0].content in response".into()))
}
