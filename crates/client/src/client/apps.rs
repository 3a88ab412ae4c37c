//! App listing for [`SplunkClient`].

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::App;

impl SplunkClient {
    /// List all installed apps in server order.
    pub async fn list_apps(&mut self) -> Result<Vec<App>> {
        crate::retry_call!(
            self,
            __auth,
            endpoints::list_apps(&self.http, &self.base_url, &__auth, self.max_retries).await
        )
    }
}
