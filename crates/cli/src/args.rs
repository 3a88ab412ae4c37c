//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Validate the `--splunkmgmt` endpoint at parse time.
//!
//! Non-responsibilities:
//! - Does not load configuration (see `main.rs` and `splunk_config::ConfigLoader`).

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use splunk_config::constants::DEFAULT_LEDGER_PATH;
use splunk_config::parse_management_endpoint;

use crate::workflow::RunType;

#[derive(Parser, Debug)]
#[command(name = "splunk-search-toggle")]
#[command(
    about = "Bulk disable, re-enable or list scheduled Splunk saved searches",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  splunk-search-toggle -r listonly -s splunk.example.com:8089 -u admin -p changeme\n  splunk-search-toggle -r disable -s 10.0.0.5:8089 -a $SPLUNK_API_TOKEN -i search,launcher\n  splunk-search-toggle -r enable -s splunk.example.com:8089 -a $SPLUNK_API_TOKEN -c ./searchlist/searchlist.csv\n"
)]
pub struct Cli {
    /// What to do with enabled, scheduled searches
    #[arg(short = 'r', long, value_enum)]
    pub runtype: RunType,

    /// Splunk management endpoint as host:port (e.g., splunk.example.com:8089)
    #[arg(
        short = 's',
        long,
        env = "SPLUNK_MGMT",
        value_name = "HOST:PORT",
        value_parser = parse_management_endpoint
    )]
    pub splunkmgmt: Option<String>,

    /// Username for session token authentication
    #[arg(short, long, env = "SPLUNK_USERNAME")]
    pub username: Option<String>,

    /// Password for session token authentication
    #[arg(short, long, env = "SPLUNK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// API token for authentication (preferred over username/password)
    #[arg(short, long, env = "SPLUNK_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// CSV ledger of actions taken
    #[arg(
        short = 'c',
        long,
        env = "SPLUNK_TOGGLE_LEDGER",
        value_name = "FILE",
        default_value = DEFAULT_LEDGER_PATH
    )]
    pub csvlist: PathBuf,

    /// Comma-separated app names to skip
    #[arg(short = 'i', long, env = "SPLUNK_TOGGLE_IGNORE_APPS", value_name = "APPS")]
    pub ignoreapps: Option<String>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, env = "SPLUNK_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Per-request timeout in seconds
    #[arg(long, env = "SPLUNK_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Maximum retries for rate-limited or unavailable read requests
    #[arg(long, env = "SPLUNK_MAX_RETRIES")]
    pub max_retries: Option<usize>,

    /// Search job poll interval in milliseconds
    #[arg(long, env = "SPLUNK_POLL_INTERVAL_MS")]
    pub poll_interval_ms: Option<u64>,

    /// Give up on a search job after this many seconds
    #[arg(long, env = "SPLUNK_MAX_WAIT_SECS")]
    pub max_wait_secs: Option<u64>,

    /// Suppress progress bars.
    ///
    /// Note: Progress bars always write to STDERR; this flag disables them entirely.
    #[arg(short, long)]
    pub quiet: bool,

    /// Log output format (logs go to STDERR; level via RUST_LOG)
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}
