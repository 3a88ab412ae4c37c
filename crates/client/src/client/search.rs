//! Search execution for [`SplunkClient`].
//!
//! # What this module handles:
//! - Running an SPL query as a job, waiting for it and fetching every result row
//! - Cancelling the remote job when the wait runs out or the caller gives up
//!
//! # What this module does NOT handle:
//! - Low-level search endpoint HTTP calls (in [`crate::endpoints::search`])
//! - Interpreting result rows (callers own their row schema)

use serde_json::Value;
use splunk_config::JobWaitConfig;
use tracing::{debug, warn};

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::JobProgress;

/// Progress callback invoked on each poll once the job is running.
pub type ProgressCallback<'a> = &'a mut (dyn FnMut(&JobProgress) + Send);

impl SplunkClient {
    /// Run `query` to completion and return all result rows.
    ///
    /// Shorthand for [`start_search`](Self::start_search) followed by
    /// [`finish_search`](Self::finish_search).
    pub async fn run_search(
        &mut self,
        query: &str,
        wait: &JobWaitConfig,
        progress: Option<ProgressCallback<'_>>,
    ) -> Result<Vec<Value>> {
        let sid = self.start_search(query).await?;
        self.finish_search(&sid, wait, progress).await
    }

    /// Submit `query` as a `normal` exec-mode job and return its sid.
    pub async fn start_search(&mut self, query: &str) -> Result<String> {
        let sid = crate::retry_call!(
            self,
            __auth,
            endpoints::create_job(
                &self.http,
                &self.base_url,
                &__auth,
                query,
                self.max_retries,
            )
            .await
        )?;
        debug!(sid = %sid, "Search job created");
        Ok(sid)
    }

    /// Wait for job `sid` and return all of its result rows.
    ///
    /// The job is polled every `wait.poll_interval`. If it is still running
    /// after `wait.max_wait`, the job is cancelled (best effort) and
    /// [`ClientError::OperationTimeout`] is returned.
    pub async fn finish_search(
        &mut self,
        sid: &str,
        wait: &JobWaitConfig,
        progress: Option<ProgressCallback<'_>>,
    ) -> Result<Vec<Value>> {
        let auth = self.authorization().await?;
        let waited = endpoints::wait_for_job_with_progress(
            &self.http,
            &self.base_url,
            &auth,
            sid,
            wait,
            self.max_retries,
            progress,
        )
        .await;

        if let Err(err) = waited {
            if matches!(err, ClientError::OperationTimeout { .. }) {
                self.cancel_search(sid).await;
            }
            return Err(err);
        }

        let results =
            endpoints::get_results(&self.http, &self.base_url, &auth, sid, self.max_retries)
                .await?;
        debug!(sid = %sid, rows = results.results.len(), "Search results fetched");
        Ok(results.results)
    }

    /// Cancel job `sid` with a single attempt, logging rather than returning failures.
    pub async fn cancel_search(&mut self, sid: &str) {
        let cancelled = match self.authorization().await {
            Ok(auth) => endpoints::cancel_job(&self.http, &self.base_url, &auth, sid, 0).await,
            Err(e) => Err(e),
        };
        match cancelled {
            Ok(()) => debug!(sid = %sid, "Search job cancelled"),
            Err(e) => warn!(sid = %sid, error = %e, "Failed to cancel search job"),
        }
    }
}
