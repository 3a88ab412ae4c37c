//! Saved search enable/disable for [`SplunkClient`].
//!
//! Toggles are single-attempt: no backoff retries and no re-login retry.
//! A failed toggle is reported to the caller, which decides whether the
//! run continues.

use crate::client::SplunkClient;
use crate::endpoints::{self, SavedSearchAction};
use crate::error::Result;

impl SplunkClient {
    /// Enable a saved search in `app`.
    pub async fn enable_saved_search(&mut self, app: &str, name: &str) -> Result<()> {
        self.toggle_saved_search(app, name, SavedSearchAction::Enable)
            .await
    }

    /// Disable a saved search in `app`.
    pub async fn disable_saved_search(&mut self, app: &str, name: &str) -> Result<()> {
        self.toggle_saved_search(app, name, SavedSearchAction::Disable)
            .await
    }

    async fn toggle_saved_search(
        &mut self,
        app: &str,
        name: &str,
        action: SavedSearchAction,
    ) -> Result<()> {
        let auth = self.authorization().await?;
        endpoints::toggle_saved_search(&self.http, &self.base_url, &auth, app, name, action).await
    }
}
