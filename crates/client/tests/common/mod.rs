//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::time::Duration;

#[allow(unused_imports)]
pub use splunk_client::testing::{job_status_body, load_fixture};

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use splunk_client::endpoints;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Job wait settings small enough to keep tests fast.
#[allow(dead_code)]
pub fn fast_wait(max_wait: Duration) -> splunk_config::JobWaitConfig {
    splunk_config::JobWaitConfig {
        poll_interval: Duration::from_millis(10),
        max_wait,
    }
}

/// Client pointed at `uri` authenticating with a fixed API token.
#[allow(dead_code)]
pub fn token_client(uri: &str, max_retries: usize) -> splunk_client::SplunkClient {
    splunk_client::SplunkClient::builder()
        .base_url(uri.to_string())
        .auth_strategy(splunk_client::AuthStrategy::ApiToken {
            token: secrecy::SecretString::new("test-token".to_string().into()),
        })
        .max_retries(max_retries)
        .build()
        .expect("client builds")
}

/// Client pointed at `uri` authenticating with username and password.
#[allow(dead_code)]
pub fn session_client(uri: &str) -> splunk_client::SplunkClient {
    splunk_client::SplunkClient::builder()
        .base_url(uri.to_string())
        .auth_strategy(splunk_client::AuthStrategy::SessionToken {
            username: "admin".to_string(),
            password: secrecy::SecretString::new("s3cret".to_string().into()),
        })
        .max_retries(0)
        .build()
        .expect("client builds")
}
