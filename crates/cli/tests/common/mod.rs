//! Shared test utilities for splunk-search-toggle integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic command factory that prevents dotenv loading.
//! - Mount the Splunk endpoints a run touches on a wiremock server.
//!
//! Invariants / Assumptions:
//! - `SPLUNK_API_TOKEN` is set to "test-token" unless overridden.
//! - Binary tests point at the mock server through `SPLUNK_BASE_URL`, since
//!   `--splunkmgmt` always produces an `https://` URL.

#![allow(dead_code)]

use std::time::Duration;

use assert_cmd::Command;
use serde_json::{Value, json};
use splunk_client::testing::job_status_body;
use splunk_client::{AuthStrategy, SplunkClient};
use splunk_config::JobWaitConfig;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const LEDGER_HEADER: &str = "app,searchname,searchnamespace,cron_schedule,action,actiontime";

/// Returns a hermetic `splunk-search-toggle` command.
///
/// - `DOTENV_DISABLED=1` prevents local `.env` contamination.
/// - `SPLUNK_API_TOKEN` is set to satisfy configuration validation.
/// - Other connection env vars are cleared so nothing leaks from the host.
pub fn toggle_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("splunk-search-toggle");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("SPLUNK_API_TOKEN", "test-token");

    cmd.env_remove("SPLUNK_BASE_URL")
        .env_remove("SPLUNK_MGMT")
        .env_remove("SPLUNK_USERNAME")
        .env_remove("SPLUNK_PASSWORD")
        .env_remove("SPLUNK_SKIP_VERIFY")
        .env_remove("SPLUNK_TIMEOUT")
        .env_remove("SPLUNK_MAX_RETRIES")
        .env_remove("SPLUNK_POLL_INTERVAL_MS")
        .env_remove("SPLUNK_MAX_WAIT_SECS")
        .env_remove("SPLUNK_TOGGLE_LEDGER")
        .env_remove("SPLUNK_TOGGLE_IGNORE_APPS")
        .env_remove("RUST_LOG");

    cmd
}

/// Hermetic command aimed at `base_url` with fast job polling.
pub fn toggle_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = toggle_cmd();
    cmd.env("SPLUNK_BASE_URL", base_url)
        .env("SPLUNK_POLL_INTERVAL_MS", "10")
        .env("SPLUNK_MAX_RETRIES", "0");
    cmd
}

/// API-token client for library-level workflow tests.
pub fn token_client(uri: &str) -> SplunkClient {
    SplunkClient::builder()
        .base_url(uri.to_string())
        .auth_strategy(AuthStrategy::ApiToken {
            token: secrecy::SecretString::new("test-token".to_string().into()),
        })
        .max_retries(0)
        .build()
        .expect("client builds")
}

pub fn fast_wait() -> JobWaitConfig {
    JobWaitConfig {
        poll_interval: Duration::from_millis(10),
        max_wait: Duration::from_secs(5),
    }
}

/// Mount `/services/apps/local` listing `apps` in order.
pub async fn mount_apps(server: &MockServer, apps: &[&str]) {
    let entries: Vec<Value> = apps
        .iter()
        .map(|name| json!({"name": name, "content": {"disabled": false}}))
        .collect();

    Mock::given(method("GET"))
        .and(path("/services/apps/local"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "entry": entries })))
        .mount(server)
        .await;
}

/// A saved search row as the listing job returns it.
pub fn search_row(app: &str, title: &str, disabled: bool) -> Value {
    json!({
        "title": title,
        "cron_schedule": "*/15 * * * *",
        "disabled": if disabled { "1" } else { "0" },
        "is_scheduled": "1",
        "owner": "nobody",
        "searchnamespace": format!("/servicesNS/nobody/{app}/saved/searches/{title}"),
        "appname": app
    })
}

/// Mount the listing job for `app`: creation, an immediately-done status and `rows`.
pub async fn mount_app_search(server: &MockServer, app: &str, rows: Vec<Value>) {
    let sid = format!("sid-{app}");

    // Form-encoded `appname="<app>"`
    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .and(body_string_contains(format!("appname%3D%22{app}%22")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "sid": sid })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/services/search/jobs/{sid}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(job_status_body(&sid, "DONE", 1.0, rows.len(), true)),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/services/search/jobs/{sid}/results")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": rows })))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount a toggle endpoint answering `status`, expected to be hit exactly once.
pub async fn mount_toggle(server: &MockServer, app: &str, title: &str, action: &str, status: u16) {
    Mock::given(method("POST"))
        .and(path(format!(
            "/servicesNS/nobody/{app}/saved/searches/{title}/{action}"
        )))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(server)
        .await;
}

/// Ledger lines without the trailing timestamp column.
pub fn ledger_lines_without_time(contents: &str) -> Vec<String> {
    contents
        .lines()
        .skip(1)
        .map(|line| match line.rsplit_once(',') {
            Some((rest, _time)) => rest.to_string(),
            None => line.to_string(),
        })
        .collect()
}
