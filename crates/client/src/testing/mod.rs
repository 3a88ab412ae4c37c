//! Testing utilities for Splunk client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use splunk_client::testing::load_fixture;
//!
//! let fixture = load_fixture("apps/list_apps.json");
//! ```

use std::path::Path;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Build a job status body in the `entry[0].content` shape Splunk returns.
pub fn job_status_body(
    sid: &str,
    dispatch_state: &str,
    done_progress: f64,
    result_count: usize,
    is_done: bool,
) -> serde_json::Value {
    serde_json::json!({
        "entry": [{
            "name": sid,
            "content": {
                "sid": sid,
                "dispatchState": dispatch_state,
                "doneProgress": done_progress,
                "resultCount": result_count,
                "isDone": is_done,
                "isFailed": false
            }
        }]
    })
}
