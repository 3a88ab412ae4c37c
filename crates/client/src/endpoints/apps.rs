//! App listing endpoint.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::send_request_with_retry;
use crate::error::{ClientError, Result};
use crate::models::{App, AppListResponse};

/// List every installed app (`count=0` disables server-side paging).
///
/// Apps are returned in server order.
pub async fn list_apps(
    client: &Client,
    base_url: &str,
    auth_header: &str,
    max_retries: usize,
) -> Result<Vec<App>> {
    debug!("Listing installed apps");

    let url = format!("{}/services/apps/local", base_url);
    let builder = client
        .get(&url)
        .header("Authorization", auth_header)
        .query(&[("output_mode", "json"), ("count", "0")]);
    let response = send_request_with_retry(builder, max_retries).await?;

    let resp: AppListResponse = response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse apps response: {}", e))
    })?;

    Ok(resp.into_apps())
}
