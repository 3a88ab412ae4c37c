//! Authentication endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::send_request_with_retry;
use crate::error::{ClientError, Result};

/// Login to Splunk with username and password, returning the session key.
pub async fn login(
    client: &Client,
    base_url: &str,
    username: &str,
    password: &str,
    max_retries: usize,
) -> Result<String> {
    debug!("Logging in to Splunk as {}", username);

    let url = format!("{}/services/auth/login", base_url);
    let builder = client.post(&url).form(&[
        ("username", username),
        ("password", password),
        ("output_mode", "json"),
    ]);

    let response = match send_request_with_retry(builder, max_retries).await {
        Ok(response) => response,
        Err(ClientError::ApiError {
            status: 401,
            message,
            ..
        }) => return Err(ClientError::AuthFailed(message)),
        Err(e) => return Err(e),
    };

    let resp: serde_json::Value = response.json().await?;

    // Newer Splunk returns a bare {"sessionKey": ...}; older versions wrap it in entry[0].content.
    resp.get("sessionKey")
        .and_then(|v| v.as_str())
        .or_else(|| resp["entry"][0]["content"]["sessionKey"].as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| ClientError::InvalidResponse("Missing sessionKey in response".to_string()))
}
