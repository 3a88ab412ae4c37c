//! Saved search enable/disable endpoints.
//!
//! # Invariants
//! - Calls go to the `nobody` owner namespace of the search's app.
//! - The search title is percent-encoded as a single path segment.
//! - Exactly one attempt is made, and only HTTP 200 counts as success.

use reqwest::Client;
use std::fmt;
use tracing::debug;

use crate::endpoints::{encode_path_segment, send_request_with_retry};
use crate::error::{ClientError, Result};

/// Which state to put a saved search into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavedSearchAction {
    Enable,
    Disable,
}

impl SavedSearchAction {
    fn path_suffix(self) -> &'static str {
        match self {
            Self::Enable => "enable",
            Self::Disable => "disable",
        }
    }
}

impl fmt::Display for SavedSearchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_suffix())
    }
}

/// Build the control URL for a saved search.
pub(crate) fn saved_search_action_url(
    base_url: &str,
    app: &str,
    name: &str,
    action: SavedSearchAction,
) -> String {
    format!(
        "{}/servicesNS/nobody/{}/saved/searches/{}/{}",
        base_url,
        encode_path_segment(app),
        encode_path_segment(name),
        action.path_suffix()
    )
}

/// Enable or disable a saved search.
pub async fn toggle_saved_search(
    client: &Client,
    base_url: &str,
    auth_header: &str,
    app: &str,
    name: &str,
    action: SavedSearchAction,
) -> Result<()> {
    let url = saved_search_action_url(base_url, app, name, action);
    debug!(app, name, %action, "Toggling saved search");

    let builder = client
        .post(&url)
        .header("Authorization", auth_header)
        .query(&[("output_mode", "json")]);
    let response = send_request_with_retry(builder, 0).await?;

    let status = response.status().as_u16();
    if status != 200 {
        return Err(ClientError::ApiError {
            status,
            url,
            message: format!("expected HTTP 200 from {action} call"),
            request_id: None,
        });
    }

    Ok(())
}
