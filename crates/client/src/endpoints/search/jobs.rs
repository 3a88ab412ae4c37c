//! Search job operations.
//!
//! # What this module handles:
//! - Creating search jobs
//! - Getting job status and polling to completion
//! - Cancelling jobs
//! - Retrieving search results
//!
//! # What this module does NOT handle:
//! - Deciding what to do with a timed-out job (see [`crate::client::search`])

use reqwest::Client;
use splunk_config::JobWaitConfig;
use tokio::time::Instant;
use tracing::debug;

use crate::endpoints::{encode_path_segment, extract_entry_content, send_request_with_retry};
use crate::error::{ClientError, Result};
use crate::models::{JobProgress, SearchJobResults, SearchJobStatus};

/// Longest query prefix written to debug logs.
const LOGGED_QUERY_CHARS: usize = 160;

/// Collapse whitespace and cap length so multi-line SPL fits on one log line.
fn loggable_query(query: &str) -> String {
    let collapsed = query.split_whitespace().collect::<Vec<_>>().join(" ");
    match collapsed.char_indices().nth(LOGGED_QUERY_CHARS) {
        Some((idx, _)) => format!("{}...", &collapsed[..idx]),
        None => collapsed,
    }
}

/// Create a new `normal` exec-mode search job and return its sid.
pub async fn create_job(
    client: &Client,
    base_url: &str,
    auth_header: &str,
    query: &str,
    max_retries: usize,
) -> Result<String> {
    debug!("Creating search job: {}", loggable_query(query));

    let url = format!("{}/services/search/jobs", base_url);

    // `normal` returns a sid immediately; the caller polls
    let form_data = [
        ("search", query),
        ("exec_mode", "normal"),
        ("output_mode", "json"),
    ];

    let builder = client
        .post(&url)
        .header("Authorization", auth_header)
        .form(&form_data);
    let response = send_request_with_retry(builder, max_retries).await?;

    let resp: serde_json::Value = response.json().await?;

    // Splunk returns either `{ "sid": ... }` or `{ "entry": [ { "content": { "sid": ... } } ] }`
    let sid = resp
        .get("sid")
        .and_then(|v| v.as_str())
        .or_else(|| {
            resp.get("entry")?
                .get(0)?
                .get("content")?
                .get("sid")?
                .as_str()
        })
        .ok_or_else(|| ClientError::InvalidResponse("Missing sid in response".to_string()))?;

    Ok(sid.to_string())
}

/// Get the status of a search job.
pub async fn get_job_status(
    client: &Client,
    base_url: &str,
    auth_header: &str,
    sid: &str,
    max_retries: usize,
) -> Result<SearchJobStatus> {
    debug!("Getting status for job: {}", sid);

    let url = format!("{}/services/search/jobs/{}", base_url, encode_path_segment(sid));

    let builder = client
        .get(&url)
        .header("Authorization", auth_header)
        .query(&[("output_mode", "json")]);
    let response = send_request_with_retry(builder, max_retries).await?;

    let resp: serde_json::Value = response.json().await?;

    let content = extract_entry_content(&resp)?;
    let mut status: SearchJobStatus = serde_json::from_value(content.clone())
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse job status: {}", e)))?;
    if status.sid.is_empty() {
        status.sid = sid.to_string();
    }
    Ok(status)
}

/// Wait for a search job to complete, reporting progress via callback.
///
/// Polls every `wait.poll_interval`. While the job is `QUEUED` or `PARSING`
/// nothing is reported; afterwards every poll is passed to `progress_cb`.
/// Returns as soon as `isDone` is observed.
///
/// # Errors
///
/// - `ClientError::OperationTimeout` once `wait.max_wait` has elapsed without completion.
/// - `ClientError::JobFailed` if Splunk reports the job as failed.
pub async fn wait_for_job_with_progress(
    client: &Client,
    base_url: &str,
    auth_header: &str,
    sid: &str,
    wait: &JobWaitConfig,
    max_retries: usize,
    mut progress_cb: Option<&mut (dyn FnMut(&JobProgress) + Send)>,
) -> Result<SearchJobStatus> {
    let start = Instant::now();

    loop {
        let status = get_job_status(client, base_url, auth_header, sid, max_retries).await?;

        if status.is_ready()
            && let Some(cb) = progress_cb.as_deref_mut()
        {
            cb(&status.progress());
        }

        if status.is_failed {
            return Err(ClientError::JobFailed {
                sid: sid.to_string(),
                message: format!(
                    "dispatch state {}",
                    status.dispatch_state.as_deref().unwrap_or("FAILED")
                ),
            });
        }

        if status.is_done {
            debug!("Job {} completed with {} results", sid, status.result_count);
            return Ok(status);
        }

        if start.elapsed() >= wait.max_wait {
            return Err(ClientError::OperationTimeout {
                operation: "wait_for_job",
                timeout: wait.max_wait,
            });
        }

        tokio::time::sleep(wait.poll_interval).await;
    }
}

/// Cancel a running search job.
pub async fn cancel_job(
    client: &Client,
    base_url: &str,
    auth_header: &str,
    sid: &str,
    max_retries: usize,
) -> Result<()> {
    debug!("Cancelling job: {}", sid);

    let url = format!(
        "{}/services/search/jobs/{}/control",
        base_url,
        encode_path_segment(sid)
    );

    let builder = client
        .post(&url)
        .header("Authorization", auth_header)
        .form(&[("action", "cancel"), ("output_mode", "json")]);
    send_request_with_retry(builder, max_retries).await?;

    Ok(())
}

/// Get all results from a finished search job (`count=0`).
pub async fn get_results(
    client: &Client,
    base_url: &str,
    auth_header: &str,
    sid: &str,
    max_retries: usize,
) -> Result<SearchJobResults> {
    debug!("Getting results for job: {}", sid);

    let url = format!(
        "{}/services/search/jobs/{}/results",
        base_url,
        encode_path_segment(sid)
    );

    let builder = client
        .get(&url)
        .header("Authorization", auth_header)
        .query(&[("output_mode", "json"), ("count", "0")]);
    let response = send_request_with_retry(builder, max_retries).await?;

    // A job with zero results may answer with an empty body
    let body = response.text().await?;
    if body.trim().is_empty() {
        return Ok(SearchJobResults::default());
    }

    let json: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse search results response: {}", e))
    })?;

    let results = if let Some(arr) = json.as_array() {
        arr.clone()
    } else {
        json["results"].as_array().cloned().unwrap_or_default()
    };

    Ok(SearchJobResults { results })
}
