//! Client builder for constructing [`SplunkClient`] instances.
//!
//! This module is responsible for:
//! - Validating required configuration (base_url, auth_strategy)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, redirects, TLS verification)
//!
//! # Invariants
//! - TLS certificates are verified unless `skip_verify(true)` is set explicitly
//!   for an `https://` URL; the opt-in lives on this builder, never in global state.
//! - The base URL never ends with a slash.

use std::time::Duration;

use crate::auth::{AuthStrategy, SessionManager};
use crate::client::SplunkClient;
use crate::error::{ClientError, Result};
use splunk_config::{
    AuthStrategy as ConfigAuthStrategy, Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`SplunkClient`].
///
/// All options have defaults except `base_url` and `auth_strategy`.
pub struct SplunkClientBuilder {
    base_url: Option<String>,
    auth_strategy: Option<AuthStrategy>,
    skip_verify: bool,
    timeout: Duration,
    max_retries: usize,
}

impl Default for SplunkClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth_strategy: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl SplunkClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the management endpoint, e.g. `https://localhost:8089`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the authentication strategy.
    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = Some(strategy);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Disabling verification exposes the session to man-in-the-middle
    /// attacks. Only use it against instances with self-signed certificates.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the per-request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries for rate-limited or unavailable read calls.
    ///
    /// Default is 3 retries with exponential backoff (1s, 2s, 4s delays).
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Create a client builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        let auth_strategy = match &config.auth.strategy {
            ConfigAuthStrategy::SessionToken { username, password } => AuthStrategy::SessionToken {
                username: username.clone(),
                password: password.clone(),
            },
            ConfigAuthStrategy::ApiToken { token } => AuthStrategy::ApiToken {
                token: token.clone(),
            },
        };

        self.base_url = Some(config.connection.base_url.clone());
        self.auth_strategy = Some(auth_strategy);
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.max_retries = config.connection.max_retries;
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`SplunkClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns [`ClientError::AuthFailed`] if `auth_strategy` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<SplunkClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let auth_strategy = self
            .auth_strategy
            .ok_or_else(|| ClientError::AuthFailed("auth_strategy is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                tracing::warn!(
                    "TLS certificate verification is disabled for {}",
                    base_url
                );
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(SplunkClient {
            http,
            base_url,
            session_manager: SessionManager::new(auth_strategy),
            max_retries: self.max_retries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[test]
    fn test_from_config_with_api_token() {
        let config = Config::with_api_token(
            "https://splunk.example.com:8089".to_string(),
            SecretString::new("test-token".to_string().into()),
        );

        let client = SplunkClient::builder().from_config(&config).build().unwrap();
        assert_eq!(client.base_url(), "https://splunk.example.com:8089");
        assert!(client.is_api_token_auth());
    }

    #[test]
    fn test_from_config_with_session_token() {
        let config = Config::with_session_token(
            "https://splunk.example.com:8089".to_string(),
            "admin".to_string(),
            SecretString::new("test-password".to_string().into()),
        );

        let client = SplunkClient::builder().from_config(&config).build().unwrap();
        assert!(!client.is_api_token_auth());
    }

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config = Config::with_api_token(
            "https://splunk.example.com:8089".to_string(),
            SecretString::new("test-token".to_string().into()),
        );
        config.connection.skip_verify = true;
        config.connection.timeout = Duration::from_secs(120);
        config.connection.max_retries = 0;

        let builder = SplunkClient::builder().from_config(&config);

        assert!(builder.skip_verify);
        assert_eq!(builder.timeout, Duration::from_secs(120));
        assert_eq!(builder.max_retries, 0);
    }

    #[test]
    fn test_skip_verify_defaults_off() {
        assert!(!SplunkClientBuilder::new().skip_verify);
    }
}
