//! Validation tests for timeouts, retries and job wait bounds.

use crate::constants::{MAX_MAX_RETRIES, MAX_MAX_WAIT_SECS, MAX_TIMEOUT_SECS};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use serial_test::serial;
use std::time::Duration;

use super::env_lock;

fn base() -> ConfigLoader {
    ConfigLoader::new()
        .with_base_url("https://localhost:8089".to_string())
        .with_api_token("test-token".to_string())
}

#[test]
fn test_timeout_zero_invalid() {
    match base().with_timeout(Duration::from_secs(0)).build() {
        Err(ConfigError::InvalidTimeout { message }) => {
            assert!(
                message.contains("must be greater than 0"),
                "Expected message about timeout > 0, got: {}",
                message
            );
        }
        other => panic!("Expected InvalidTimeout error for zero timeout, got {other:?}"),
    }
}

#[test]
fn test_timeout_exceeds_max_invalid() {
    let result = base()
        .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS + 1))
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_timeout_at_max_valid() {
    assert!(
        base()
            .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS))
            .build()
            .is_ok()
    );
}

#[test]
fn test_max_retries_zero_valid() {
    let config = base().with_max_retries(0).build().unwrap();
    assert_eq!(config.connection.max_retries, 0);
}

#[test]
fn test_max_retries_above_bound_invalid() {
    let result = base().with_max_retries(MAX_MAX_RETRIES + 1).build();
    assert!(matches!(result, Err(ConfigError::InvalidMaxRetries { .. })));
}

#[test]
fn test_zero_poll_interval_invalid() {
    let result = base().with_poll_interval(Duration::ZERO).build();
    assert!(matches!(result, Err(ConfigError::InvalidJobWait { .. })));
}

#[test]
fn test_max_wait_shorter_than_poll_interval_invalid() {
    let result = base()
        .with_poll_interval(Duration::from_secs(5))
        .with_max_wait(Duration::from_secs(1))
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidJobWait { .. })));
}

#[test]
fn test_max_wait_above_bound_invalid() {
    let result = base()
        .with_max_wait(Duration::from_secs(MAX_MAX_WAIT_SECS + 1))
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidJobWait { .. })));
}

#[test]
#[serial]
fn test_max_retries_env_above_bound_invalid() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("SPLUNK_MAX_RETRIES", Some("99"))], || {
        let result = ConfigLoader::new().from_env();
        assert!(matches!(result, Err(ConfigError::InvalidMaxRetries { .. })));
    });
}
