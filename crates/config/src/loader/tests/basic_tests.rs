//! Basic loader tests: auth strategy selection and endpoint handling.

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::AuthStrategy;
use std::time::Duration;

#[test]
fn test_loader_with_api_token() {
    let config = ConfigLoader::new()
        .with_base_url("https://localhost:8089".to_string())
        .with_api_token("test-token".to_string())
        .build()
        .unwrap();

    assert!(matches!(
        config.auth.strategy,
        AuthStrategy::ApiToken { .. }
    ));
}

#[test]
fn test_loader_with_session_token() {
    let config = ConfigLoader::new()
        .with_base_url("https://localhost:8089".to_string())
        .with_username("admin".to_string())
        .with_password("password".to_string())
        .build()
        .unwrap();

    assert!(matches!(
        config.auth.strategy,
        AuthStrategy::SessionToken { .. }
    ));
}

#[test]
fn test_loader_missing_base_url() {
    let result = ConfigLoader::new()
        .with_api_token("test-token".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::MissingBaseUrl)));
}

#[test]
fn test_loader_missing_auth() {
    let result = ConfigLoader::new()
        .with_base_url("https://localhost:8089".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::MissingAuth)));
}

#[test]
fn test_username_without_password_is_missing_auth() {
    let result = ConfigLoader::new()
        .with_base_url("https://localhost:8089".to_string())
        .with_username("admin".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::MissingAuth)));
}

#[test]
fn test_api_token_takes_precedence() {
    let config = ConfigLoader::new()
        .with_base_url("https://localhost:8089".to_string())
        .with_username("admin".to_string())
        .with_password("password".to_string())
        .with_api_token("api-token".to_string())
        .build()
        .unwrap();

    assert!(matches!(
        config.auth.strategy,
        AuthStrategy::ApiToken { .. }
    ));
}

#[test]
fn test_management_endpoint_becomes_https_base_url() {
    let config = ConfigLoader::new()
        .with_management_endpoint("splunk.example.com:8089")
        .unwrap()
        .with_api_token("t".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.base_url, "https://splunk.example.com:8089");
    assert!(!config.connection.skip_verify);
}

#[test]
fn test_invalid_management_endpoint_rejected() {
    let result = ConfigLoader::new().with_management_endpoint("not a host");
    assert!(matches!(
        result,
        Err(ConfigError::InvalidManagementEndpoint { .. })
    ));
}

#[test]
fn test_base_url_trailing_slash_stripped() {
    let config = ConfigLoader::new()
        .with_base_url("http://127.0.0.1:8089/".to_string())
        .with_api_token("t".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.base_url, "http://127.0.0.1:8089");
}

#[test]
fn test_base_url_scheme_must_be_http() {
    let result = ConfigLoader::new()
        .with_base_url("ftp://localhost:8089".to_string())
        .with_api_token("t".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_job_wait_overrides_applied() {
    let config = ConfigLoader::new()
        .with_base_url("https://localhost:8089".to_string())
        .with_api_token("t".to_string())
        .with_poll_interval(Duration::from_millis(250))
        .with_max_wait(Duration::from_secs(5))
        .with_skip_verify(true)
        .build()
        .unwrap();

    assert_eq!(config.job_wait.poll_interval, Duration::from_millis(250));
    assert_eq!(config.job_wait.max_wait, Duration::from_secs(5));
    assert!(config.connection.skip_verify);
}
