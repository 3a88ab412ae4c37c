//! Authentication strategies and session management.
//!
//! Splunk accepts two `Authorization` schemes on the management port:
//! `Splunk <sessionKey>` for keys minted by `/services/auth/login`, and
//! `Bearer <token>` for authentication tokens created in Splunk Web.

use secrecy::{ExposeSecret, SecretString};

/// Strategy for authenticating with Splunk.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// Username and password authentication.
    /// The client logs in once and reuses the session key.
    SessionToken {
        username: String,
        password: SecretString,
    },
    /// API token (bearer token authentication).
    ApiToken { token: SecretString },
}

/// Holds the active credential for a client.
#[derive(Debug)]
pub struct SessionManager {
    auth_strategy: AuthStrategy,
    session_key: Option<SecretString>,
}

impl SessionManager {
    /// Create a new session manager with the given auth strategy.
    pub fn new(strategy: AuthStrategy) -> Self {
        Self {
            auth_strategy: strategy,
            session_key: None,
        }
    }

    /// Get the current auth strategy.
    pub fn strategy(&self) -> &AuthStrategy {
        &self.auth_strategy
    }

    /// Check if we're using API token auth (no session management needed).
    pub fn is_api_token(&self) -> bool {
        matches!(self.auth_strategy, AuthStrategy::ApiToken { .. })
    }

    /// Whether a session key is held (always true for API tokens).
    pub fn has_credential(&self) -> bool {
        self.is_api_token() || self.session_key.is_some()
    }

    /// Value for the `Authorization` header, if a credential is available.
    pub fn authorization_header(&self) -> Option<String> {
        match &self.auth_strategy {
            AuthStrategy::ApiToken { token } => {
                Some(format!("Bearer {}", token.expose_secret()))
            }
            AuthStrategy::SessionToken { .. } => self
                .session_key
                .as_ref()
                .map(|key| format!("Splunk {}", key.expose_secret())),
        }
    }

    /// Store the session key returned by a login call.
    pub fn set_session_key(&mut self, key: String) {
        self.session_key = Some(SecretString::new(key.into()));
    }

    /// Forget the session key so the next call logs in again.
    pub fn clear_session(&mut self) {
        self.session_key = None;
    }
}
