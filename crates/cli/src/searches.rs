//! Per-app listing of enabled, scheduled saved searches.
//!
//! The listing runs as a `| rest` search job so that the search namespace and
//! owning app can be extracted from each saved search's `id` URL. Rows whose
//! app does not match the enumerated app (searches shared from elsewhere) are
//! filtered out by the query itself.
//!
//! A listing job interrupted by cancellation is cancelled on the server too.

use serde::Deserialize;
use serde_json::Value;
use splunk_client::serde_helpers::bool_from_string_or_number;
use anyhow::Result;
use splunk_client::{JobProgress, SplunkClient};
use splunk_config::JobWaitConfig;
use tracing::{debug, warn};

use crate::cancellation::{CancellationToken, Cancelled};

/// One scheduled saved search as listed for an app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRecord {
    pub app: String,
    pub title: String,
    pub searchnamespace: String,
    pub cron_schedule: String,
    pub disabled: bool,
    pub is_scheduled: bool,
    pub owner: String,
}

impl SearchRecord {
    /// Enabled and scheduled, i.e. a candidate for toggling.
    pub fn is_active_schedule(&self) -> bool {
        self.is_scheduled && !self.disabled
    }
}

#[derive(Debug, Deserialize)]
struct SearchRow {
    title: String,
    #[serde(default)]
    searchnamespace: String,
    #[serde(default)]
    cron_schedule: String,
    #[serde(default, deserialize_with = "bool_from_string_or_number")]
    disabled: bool,
    #[serde(default, deserialize_with = "bool_from_string_or_number")]
    is_scheduled: bool,
    #[serde(default)]
    owner: String,
}

/// SPL listing the enabled, scheduled saved searches that live in `app`.
pub fn build_query(app: &str) -> String {
    let app = escape_quoted(app);
    format!(
        concat!(
            "| rest /servicesNS/-/{app}/saved/searches",
            " | search is_scheduled=1 disabled=0",
            " | table id title cron_schedule disabled is_scheduled owner",
            r#" | rex field=id "^https?:\/\/[^:\/]+:\d+(?<searchnamespace>.+)$""#,
            r#" | rex field=id "(?<appname>[^\/]+)\/[^\/]+\/[^\/]+\/[^\/]+$""#,
            r#" | search appname="{app}""#,
            " | fields - id"
        ),
        app = app
    )
}

fn escape_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Decode result rows into records for `app`, keeping only active schedules.
///
/// Rows that cannot be decoded are logged and skipped.
pub fn parse_records(app: &str, rows: Vec<Value>) -> Vec<SearchRecord> {
    rows.into_iter()
        .filter_map(|row| match serde_json::from_value::<SearchRow>(row) {
            Ok(row) => Some(SearchRecord {
                app: app.to_string(),
                title: row.title,
                searchnamespace: row.searchnamespace,
                cron_schedule: row.cron_schedule,
                disabled: row.disabled,
                is_scheduled: row.is_scheduled,
                owner: row.owner,
            }),
            Err(e) => {
                warn!(app, error = %e, "Skipping malformed saved search row");
                None
            }
        })
        .filter(SearchRecord::is_active_schedule)
        .collect()
}

/// Run the listing job for `app` and return its active scheduled searches.
///
/// The job wait is raced against `cancel`; when cancellation wins, the job is
/// cancelled on the server and [`Cancelled`] is returned.
pub async fn enumerate_searches(
    client: &mut SplunkClient,
    app: &str,
    wait: &JobWaitConfig,
    progress: Option<&mut (dyn FnMut(&JobProgress) + Send)>,
    cancel: &CancellationToken,
) -> Result<Vec<SearchRecord>> {
    let sid = client.start_search(&build_query(app)).await?;

    let finished = tokio::select! {
        rows = client.finish_search(&sid, wait, progress) => Some(rows),
        _ = cancel.cancelled() => None,
    };
    let Some(rows) = finished else {
        client.cancel_search(&sid).await;
        return Err(Cancelled.into());
    };

    let rows = rows?;
    let total = rows.len();
    let records = parse_records(app, rows);
    debug!(app, rows = total, kept = records.len(), "Listed saved searches");
    Ok(records)
}
