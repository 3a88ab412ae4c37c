//! Integration tests for configuration loading through the public API.
//!
//! These tests verify that the ConfigLoader builder chain works the way the
//! CLI drives it: dotenv, then environment, then explicit overrides.

use splunk_config::constants::DEFAULT_LEDGER_PATH;
use splunk_config::{AuthStrategy, ConfigError, ConfigLoader, JobWaitConfig, env_var_or_none};
use std::time::Duration;

#[test]
fn test_config_loader_cli_overrides() {
    let config = ConfigLoader::new()
        .with_management_endpoint("cli-override.example.com:8089")
        .expect("valid endpoint")
        .with_api_token("cli-token".to_string())
        .build()
        .expect("should build with CLI overrides");

    assert_eq!(
        config.connection.base_url,
        "https://cli-override.example.com:8089"
    );
    assert!(matches!(
        config.auth.strategy,
        AuthStrategy::ApiToken { .. }
    ));
    assert_eq!(config.job_wait, JobWaitConfig::default());
}

#[test]
fn test_env_var_or_none_exported() {
    let _result: Option<String> = env_var_or_none("SPLUNK_MGMT");
}

#[test]
fn test_default_credentials_flagged() {
    let config = ConfigLoader::new()
        .with_base_url("https://localhost:8089".to_string())
        .with_username("admin".to_string())
        .with_password("changeme".to_string())
        .build()
        .unwrap();

    assert!(config.is_using_default_credentials());
}

#[test]
fn test_config_error_messages_are_actionable() {
    let err = ConfigLoader::new()
        .with_api_token("t".to_string())
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::MissingBaseUrl));
    assert!(err.to_string().contains("--splunkmgmt"));

    let err = ConfigLoader::new()
        .with_base_url("https://localhost:8089".to_string())
        .with_api_token("t".to_string())
        .with_poll_interval(Duration::from_secs(10))
        .with_max_wait(Duration::from_secs(1))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("poll interval"));
}

#[test]
fn test_default_ledger_path() {
    assert_eq!(DEFAULT_LEDGER_PATH, "./searchlist/searchlist.csv");
}
