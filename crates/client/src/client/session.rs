//! Client-level session management helpers.
//!
//! # Invariants
//! - [`SplunkClient::authorization()`] requires `&mut self` because it may trigger a login call
//! - API token authentication never triggers login; the token is used directly

use crate::auth::AuthStrategy;
use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use secrecy::ExposeSecret;

impl SplunkClient {
    /// `Authorization` header value for the next request, logging in first if needed.
    pub(crate) async fn authorization(&mut self) -> Result<String> {
        if !self.session_manager.has_credential() {
            self.login().await?;
        }

        self.session_manager.authorization_header().ok_or_else(|| {
            let username = match self.session_manager.strategy() {
                AuthStrategy::SessionToken { username, .. } => username.clone(),
                AuthStrategy::ApiToken { .. } => "api-token".to_string(),
            };
            ClientError::SessionExpired { username }
        })
    }

    /// Check if the client is using API token authentication.
    pub fn is_api_token_auth(&self) -> bool {
        self.session_manager.is_api_token()
    }

    /// Establish credentials up front.
    ///
    /// For session auth this logs in and stores the session key. For API
    /// token auth there is nothing to exchange and this returns immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] when Splunk rejects the credentials.
    pub async fn login(&mut self) -> Result<()> {
        if let AuthStrategy::SessionToken { username, password } = self.session_manager.strategy() {
            let key = endpoints::login(
                &self.http,
                &self.base_url,
                username,
                password.expose_secret(),
                self.max_retries,
            )
            .await?;

            self.session_manager.set_session_key(key);
        }
        Ok(())
    }
}
