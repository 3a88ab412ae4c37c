//! Connection and job-wait configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeouts, retries).
//! - Define how long and how often to poll a search job.
//! - Define the main `Config` structure combining connection, auth and job wait.
//!
//! Does NOT handle:
//! - Configuration loading from env or CLI (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Default values come from `crate::constants`, not magic numbers.
//! - TLS verification is on unless `skip_verify` is explicitly set.

use crate::constants::{
    DEFAULT_DEV_PASSWORD, DEFAULT_DEV_USERNAME, DEFAULT_MAX_RETRIES, DEFAULT_MAX_WAIT_SECS,
    DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_SECS,
};
use crate::types::auth::{AuthConfig, AuthStrategy};
use secrecy::SecretString;
use std::time::Duration;

/// Connection configuration for the Splunk management endpoint.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the management endpoint (e.g., https://localhost:8089)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Per-request timeout
    pub timeout: Duration,
    /// Maximum number of retries for rate-limited or unavailable read calls
    pub max_retries: usize,
}

/// Bounds for waiting on an asynchronous search job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobWaitConfig {
    /// Delay between status polls.
    pub poll_interval: Duration,
    /// Give up after this much time has elapsed.
    pub max_wait: Duration,
}

impl Default for JobWaitConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            max_wait: Duration::from_secs(DEFAULT_MAX_WAIT_SECS),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
    /// Search job polling settings
    pub job_wait: JobWaitConfig,
}

impl Config {
    /// Checks if this configuration is using Splunk's stock `admin/changeme` credentials.
    pub fn is_using_default_credentials(&self) -> bool {
        use secrecy::ExposeSecret;

        matches!(
            &self.auth.strategy,
            AuthStrategy::SessionToken { username, password }
                if username == DEFAULT_DEV_USERNAME
                    && password.expose_secret() == DEFAULT_DEV_PASSWORD
        )
    }

    /// Create a new config with the specified base URL and API token.
    pub fn with_api_token(base_url: String, token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::new(base_url),
            auth: AuthConfig {
                strategy: AuthStrategy::ApiToken { token },
            },
            job_wait: JobWaitConfig::default(),
        }
    }

    /// Create a new config with the specified base URL and username/password.
    pub fn with_session_token(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::new(base_url),
            auth: AuthConfig {
                strategy: AuthStrategy::SessionToken { username, password },
            },
            job_wait: JobWaitConfig::default(),
        }
    }
}

impl ConnectionConfig {
    fn new(base_url: String) -> Self {
        Self {
            base_url,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_with_api_token() {
        let token = SecretString::new("test-token".to_string().into());
        let config = Config::with_api_token("https://splunk.example.com:8089".to_string(), token);
        assert!(matches!(
            config.auth.strategy,
            AuthStrategy::ApiToken { .. }
        ));
        assert!(!config.connection.skip_verify);
        assert_eq!(config.job_wait, JobWaitConfig::default());
    }

    #[test]
    fn test_job_wait_defaults() {
        let wait = JobWaitConfig::default();
        assert_eq!(wait.poll_interval, Duration::from_secs(2));
        assert_eq!(wait.max_wait, Duration::from_secs(600));
    }

    #[test]
    fn test_default_credentials_detected() {
        let config = Config::with_session_token(
            "https://localhost:8089".to_string(),
            "admin".to_string(),
            SecretString::new("changeme".to_string().into()),
        );
        assert!(config.is_using_default_credentials());

        let config = Config::with_session_token(
            "https://localhost:8089".to_string(),
            "admin".to_string(),
            SecretString::new("something-else".to_string().into()),
        );
        assert!(!config.is_using_default_credentials());
    }

    /// Test that Config Debug output does not expose secrets.
    #[test]
    fn test_config_debug_does_not_expose_secrets() {
        let password = SecretString::new("my-secret-password".to_string().into());
        let config = Config::with_session_token(
            "https://localhost:8089".to_string(),
            "admin".to_string(),
            password,
        );

        let debug_output = format!("{:?}", config);
        assert!(!debug_output.contains("my-secret-password"));
    }
}
