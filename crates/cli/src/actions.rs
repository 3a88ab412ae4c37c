//! Saved search enable/disable with per-item failure isolation.
//!
//! A failed toggle is logged and reported as [`ActionOutcome::Failed`]; it
//! never aborts the run and is never retried.

use splunk_client::{SavedSearchAction, SplunkClient};
use tracing::{info, warn};

use crate::ledger::{LedgerAction, LedgerRow};
use crate::searches::SearchRecord;

/// Result of a single toggle call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Succeeded,
    Failed,
}

impl ActionOutcome {
    /// Ledger tag for a toggle that was attempted as `action`.
    pub fn ledger_action(self, action: SavedSearchAction) -> LedgerAction {
        match (self, action) {
            (Self::Failed, _) => LedgerAction::Failed,
            (Self::Succeeded, SavedSearchAction::Disable) => LedgerAction::Disable,
            (Self::Succeeded, SavedSearchAction::Enable) => LedgerAction::Enable,
        }
    }
}

async fn toggle(
    client: &mut SplunkClient,
    app: &str,
    name: &str,
    action: SavedSearchAction,
) -> ActionOutcome {
    let result = match action {
        SavedSearchAction::Disable => client.disable_saved_search(app, name).await,
        SavedSearchAction::Enable => client.enable_saved_search(app, name).await,
    };

    match result {
        Ok(()) => {
            info!(app, search = name, %action, "Saved search toggled");
            ActionOutcome::Succeeded
        }
        Err(e) => {
            warn!(app, search = name, %action, error = %e, "Saved search toggle failed");
            ActionOutcome::Failed
        }
    }
}

/// Disable the saved search described by `record`.
pub async fn disable_search(client: &mut SplunkClient, record: &SearchRecord) -> ActionOutcome {
    toggle(client, &record.app, &record.title, SavedSearchAction::Disable).await
}

/// Enable the saved search a ledger row refers to.
pub async fn enable_search(client: &mut SplunkClient, row: &LedgerRow) -> ActionOutcome {
    toggle(client, &row.app, &row.searchname, SavedSearchAction::Enable).await
}
