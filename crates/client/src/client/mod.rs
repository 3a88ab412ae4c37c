//! Main Splunk REST API client and API methods.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Login and credential helpers (private module)
//! - `apps`: App listing
//! - `search`: Running a search job to completion
//! - `saved_searches`: Enabling and disabling saved searches
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Credential storage (delegated to [`crate::auth::SessionManager`])
//!
//! # Invariants
//! - Read calls that hit 401 with session auth clear the session, log in again
//!   and retry once (the `retry_call!` macro). API tokens never trigger a re-login.
//! - Saved search toggles are never retried.

pub mod builder;
mod session;

mod apps;
mod saved_searches;
pub mod search;

use crate::auth::SessionManager;

/// Wrap an async API call with one re-login and retry on HTTP 401.
///
/// The placeholder identifier (conventionally `__auth`) is bound to the
/// current `Authorization` header value before each attempt.
///
/// ```ignore
/// retry_call!(self, __auth, endpoints::list_apps(&self.http, &self.base_url, &__auth, self.max_retries).await)
/// ```
#[macro_export]
macro_rules! retry_call {
    ($self:expr, $auth:ident, $call:expr) => {{
        let $auth = $self.authorization().await?;
        let result = $call;

        match result {
            Ok(data) => Ok(data),
            Err($crate::error::ClientError::ApiError { status: 401, .. })
                if !$self.is_api_token_auth() =>
            {
                ::tracing::debug!("Session rejected (401), re-authenticating");
                $self.session_manager.clear_session();
                let $auth = $self.authorization().await?;
                $call
            }
            Err(e) => Err(e),
        }
    }};
}

/// Splunk REST API client.
///
/// Create one with [`SplunkClient::builder()`]:
///
/// ```rust,ignore
/// use splunk_client::{SplunkClient, AuthStrategy};
/// use secrecy::SecretString;
///
/// let client = SplunkClient::builder()
///     .base_url("https://localhost:8089".to_string())
///     .auth_strategy(AuthStrategy::ApiToken {
///         token: SecretString::new("my-token".to_string().into()),
///     })
///     .build()?;
/// ```
#[derive(Debug)]
pub struct SplunkClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) session_manager: SessionManager,
    pub(crate) max_retries: usize,
}

impl SplunkClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SplunkClientBuilder {
        builder::SplunkClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
