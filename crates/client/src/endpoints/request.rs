//! Retry helper for HTTP requests with exponential backoff.
//!
//! Requests that fail with a retryable status (429, 502, 503, 504) are
//! re-sent with exponential backoff. Every other non-success status is turned
//! into [`ClientError::ApiError`], with Splunk's `messages` payload flattened
//! into the error message when present.

use reqwest::{RequestBuilder, Response};
use splunk_config::constants::DEFAULT_RETRY_BASE_DELAY_SECS;
use std::time::Duration;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::SplunkMessages;

/// Sends an HTTP request, retrying retryable statuses up to `max_retries` times.
///
/// `max_retries == 0` means exactly one attempt. Backoff doubles per attempt
/// starting at one second (1s, 2s, 4s, ...).
///
/// # Errors
///
/// - `ClientError::MaxRetriesExceeded` when every attempt returned a retryable status.
/// - `ClientError::ApiError` for any other non-2xx status.
/// - `ClientError::HttpError` for transport failures.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
) -> Result<Response> {
    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None if attempt == 0 => {
                debug!("Request builder cannot be cloned, single attempt only");
                let response = builder.send().await?;
                return check_status(response).await;
            }
            None => return Err(ClientError::MaxRetriesExceeded(attempt)),
        };

        let response = attempt_builder.send().await?;
        let status = response.status().as_u16();

        if ClientError::is_retryable_status(status) && attempt < max_retries {
            let backoff = Duration::from_secs(DEFAULT_RETRY_BASE_DELAY_SECS << attempt);
            debug!(
                status,
                attempt = attempt + 1,
                max_attempts = max_retries + 1,
                backoff_secs = backoff.as_secs(),
                "Retryable status, backing off"
            );
            tokio::time::sleep(backoff).await;
            continue;
        }

        if ClientError::is_retryable_status(status) && max_retries > 0 {
            debug!(attempts = attempt + 1, "Max retries exhausted");
            return Err(ClientError::MaxRetriesExceeded(max_retries + 1));
        }

        if attempt > 0 {
            debug!(attempt = attempt + 1, "Request completed after retry");
        }
        return check_status(response).await;
    }

    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

/// Pass 2xx responses through; map everything else to `ApiError`.
async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let request_id = response
        .headers()
        .get("X-Splunk-Request-Id")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = match serde_json::from_str::<SplunkMessages>(&body) {
        Ok(m) if !m.messages.is_empty() => m.joined(),
        _ => body,
    };

    Err(ClientError::ApiError {
        status,
        url,
        message,
        request_id,
    })
}
