//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse environment variables for the Splunk connection and job wait.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.
//! - `SPLUNK_MGMT` (host:port) wins over `SPLUNK_BASE_URL` when both are set.

use secrecy::SecretString;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::endpoint::parse_management_endpoint;
use super::error::ConfigError;
use crate::constants::MAX_MAX_RETRIES;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(key: &str, value: &str, expected: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        var: key.to_string(),
        message: expected.to_string(),
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(mgmt) = env_var_or_none("SPLUNK_MGMT") {
        loader.set_base_url(Some(parse_management_endpoint(&mgmt)?));
    } else if let Some(url) = env_var_or_none("SPLUNK_BASE_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(username) = env_var_or_none("SPLUNK_USERNAME") {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none("SPLUNK_PASSWORD") {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(token) = env_var_or_none("SPLUNK_API_TOKEN") {
        loader.set_api_token(Some(SecretString::new(token.into())));
    }
    if let Some(skip) = env_var_or_none("SPLUNK_SKIP_VERIFY") {
        loader.set_skip_verify(Some(parse_env(
            "SPLUNK_SKIP_VERIFY",
            &skip,
            "must be true or false",
        )?));
    }
    if let Some(timeout) = env_var_or_none("SPLUNK_TIMEOUT") {
        let secs: u64 = parse_env("SPLUNK_TIMEOUT", &timeout, "must be a number")?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) = env_var_or_none("SPLUNK_MAX_RETRIES") {
        let value: usize = parse_env(
            "SPLUNK_MAX_RETRIES",
            &retries,
            "must be a non-negative integer",
        )?;
        if value > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!("must be between 0 and {} (got {})", MAX_MAX_RETRIES, value),
            });
        }
        loader.set_max_retries(Some(value));
    }
    if let Some(interval) = env_var_or_none("SPLUNK_POLL_INTERVAL_MS") {
        let ms: u64 = parse_env("SPLUNK_POLL_INTERVAL_MS", &interval, "must be a number")?;
        loader.set_poll_interval(Some(Duration::from_millis(ms)));
    }
    if let Some(max_wait) = env_var_or_none("SPLUNK_MAX_WAIT_SECS") {
        let secs: u64 = parse_env("SPLUNK_MAX_WAIT_SECS", &max_wait, "must be a number")?;
        loader.set_max_wait(Some(Duration::from_secs(secs)));
    }

    Ok(())
}
