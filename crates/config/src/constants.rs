//! Centralized constants for the search toggle workspace.
//!
//! Default values shared by the config, client and CLI crates live here so
//! that magic numbers are not duplicated across crates.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default maximum number of retries for rate-limited or unavailable read calls.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound accepted for `max_retries`.
pub const MAX_MAX_RETRIES: usize = 10;

/// Base delay for exponential backoff between retries, in seconds.
pub const DEFAULT_RETRY_BASE_DELAY_SECS: u64 = 1;

// =============================================================================
// Search Job Polling
// =============================================================================

/// Default polling interval for job status checks in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

/// Default maximum time to wait for a search job to finish, in seconds.
pub const DEFAULT_MAX_WAIT_SECS: u64 = 600;

/// Maximum accepted job wait in seconds (24 hours).
pub const MAX_MAX_WAIT_SECS: u64 = 86400;

// =============================================================================
// Ledger
// =============================================================================

/// Default location of the CSV ledger, relative to the working directory.
pub const DEFAULT_LEDGER_PATH: &str = "./searchlist/searchlist.csv";

// =============================================================================
// Well-known development credentials
// =============================================================================

/// Splunk's stock administrator name.
pub const DEFAULT_DEV_USERNAME: &str = "admin";

/// Splunk's stock administrator password.
pub const DEFAULT_DEV_PASSWORD: &str = "changeme";
