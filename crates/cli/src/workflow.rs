//! Run orchestration for the three run types.
//!
//! Responsibilities:
//! - `disable` / `listonly`: reset the ledger, walk apps and their scheduled
//!   searches, toggle (or just record) each one, append a ledger row per search.
//! - `enable`: replay ledger rows tagged `disable` or `FAILED` and rewrite
//!   their tags in place. Each `(app, searchname)` pair is toggled at most
//!   once; later rows for the same pair were rewritten with it and are skipped.
//! - Check the cancellation token between items and race it against job waits.
//!
//! Does NOT handle:
//! - Argument parsing or client construction (see `main.rs`).
//!
//! Invariants:
//! - Calls are strictly sequential: app by app, search by search.
//! - A failed toggle is recorded as `FAILED` and the run continues; every other
//!   error ends the run.

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ValueEnum;
use splunk_client::{JobProgress, SavedSearchAction, SplunkClient};
use splunk_config::JobWaitConfig;
use tracing::info;

use crate::actions::{self, ActionOutcome};
use crate::apps::{IgnoreList, enumerate_apps};
use crate::cancellation::CancellationToken;
use crate::ledger::{Ledger, LedgerAction};
use crate::progress::SearchProgress;
use crate::searches::{SearchRecord, enumerate_searches};

/// What a run does with the scheduled searches it finds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RunType {
    /// Disable every enabled, scheduled search and record it.
    Disable,
    /// Re-enable the searches a previous disable run recorded.
    Enable,
    /// Record the enabled, scheduled searches without changing them.
    Listonly,
}

impl fmt::Display for RunType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Disable => "disable",
            Self::Enable => "enable",
            Self::Listonly => "listonly",
        })
    }
}

/// Inputs for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub runtype: RunType,
    pub ledger_path: PathBuf,
    pub ignore: IgnoreList,
    pub job_wait: JobWaitConfig,
    /// Draw progress bars on stderr.
    pub show_progress: bool,
}

/// Counters reported after `Done!`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Apps whose searches were listed (or replayed, for enable).
    pub apps: usize,
    /// Searches found (or ledger rows read, for enable).
    pub searches: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Ledger rows an enable run left alone.
    pub skipped: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "apps: {}, searches: {}, succeeded: {}, failed: {}, skipped: {}",
            self.apps, self.searches, self.succeeded, self.failed, self.skipped
        )
    }
}

/// Execute a run to completion.
pub async fn run(
    client: &mut SplunkClient,
    options: &RunOptions,
    cancel: &CancellationToken,
) -> Result<RunSummary> {
    let ledger = Ledger::new(&options.ledger_path);
    info!(runtype = %options.runtype, ledger = %ledger.path().display(), "Starting run");

    match options.runtype {
        RunType::Disable | RunType::Listonly => collect(client, options, &ledger, cancel).await,
        RunType::Enable => replay(client, &ledger, cancel).await,
    }
}

async fn collect(
    client: &mut SplunkClient,
    options: &RunOptions,
    ledger: &Ledger,
    cancel: &CancellationToken,
) -> Result<RunSummary> {
    ledger.reset().context("failed to reset ledger")?;

    let apps = enumerate_apps(client, &options.ignore)
        .await
        .context("failed to list apps")?;

    let mut summary = RunSummary::default();
    for app in &apps {
        cancel.check()?;
        println!("Looping through searches in app {app}");

        let records = list_app_searches(client, app, options, cancel).await?;
        summary.apps += 1;
        summary.searches += records.len();

        for record in &records {
            cancel.check()?;
            match options.runtype {
                RunType::Listonly => {
                    println!("Listing search: {} : {}", record.app, record.title);
                    ledger
                        .append(record, LedgerAction::ListOnly)
                        .context("failed to write ledger")?;
                }
                _ => {
                    println!("Disabling search: {} : {}", record.app, record.title);
                    let outcome = actions::disable_search(client, record).await;
                    tally(&mut summary, outcome);
                    ledger
                        .append(record, outcome.ledger_action(SavedSearchAction::Disable))
                        .context("failed to write ledger")?;
                }
            }
        }
    }

    Ok(summary)
}

async fn list_app_searches(
    client: &mut SplunkClient,
    app: &str,
    options: &RunOptions,
    cancel: &CancellationToken,
) -> Result<Vec<SearchRecord>> {
    let bar = SearchProgress::new(options.show_progress, app);
    let mut on_progress = |progress: &JobProgress| bar.update(progress);

    let records = enumerate_searches(
        client,
        app,
        &options.job_wait,
        Some(&mut on_progress),
        cancel,
    )
    .await
    .with_context(|| format!("failed to list saved searches in app '{app}'"))?;

    bar.finish();
    Ok(records)
}

async fn replay(
    client: &mut SplunkClient,
    ledger: &Ledger,
    cancel: &CancellationToken,
) -> Result<RunSummary> {
    let rows = ledger.read_all().context("failed to read ledger")?;

    let mut summary = RunSummary {
        searches: rows.len(),
        ..RunSummary::default()
    };
    let mut apps: HashSet<&str> = HashSet::new();
    let mut replayed: HashSet<(&str, &str)> = HashSet::new();

    for row in &rows {
        cancel.check()?;

        let key = (row.app.as_str(), row.searchname.as_str());
        if !row.action.needs_enable() || !replayed.insert(key) {
            summary.skipped += 1;
            continue;
        }

        apps.insert(row.app.as_str());
        println!("Enabling search: {} : {}", row.app, row.searchname);
        let outcome = actions::enable_search(client, row).await;
        tally(&mut summary, outcome);

        ledger
            .update(
                &row.searchname,
                Some(row.app.as_str()),
                outcome.ledger_action(SavedSearchAction::Enable),
            )
            .context("failed to update ledger")?;
    }

    summary.apps = apps.len();
    Ok(summary)
}

fn tally(summary: &mut RunSummary, outcome: ActionOutcome) {
    match outcome {
        ActionOutcome::Succeeded => summary.succeeded += 1,
        ActionOutcome::Failed => summary.failed += 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_display() {
        let summary = RunSummary {
            apps: 2,
            searches: 3,
            succeeded: 1,
            failed: 1,
            skipped: 1,
        };
        assert_eq!(
            summary.to_string(),
            "apps: 2, searches: 3, succeeded: 1, failed: 1, skipped: 1"
        );
    }

    #[test]
    fn test_runtype_names() {
        assert_eq!(RunType::Listonly.to_string(), "listonly");
        assert_eq!(
            RunType::from_str("disable", false).unwrap(),
            RunType::Disable
        );
        assert!(RunType::from_str("DISABLE", false).is_err());
    }
}
