//! splunk-search-toggle: bulk-toggle scheduled Splunk saved searches.
//!
//! Responsibilities:
//! - Parse arguments, layer them over `.env` and environment configuration.
//! - Install logging and the Ctrl+C handler.
//! - Run the workflow and map failures to structured exit codes.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap env defaults.
//! - STDOUT carries run progress lines and the final summary; logs and bars go to STDERR.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use splunk_client::SplunkClient;
use splunk_config::{Config, ConfigLoader};
use splunk_search_toggle::args::{Cli, LogFormat};
use splunk_search_toggle::cancellation::{CancellationToken, print_cancelled_message};
use splunk_search_toggle::error::{ExitCode, ExitCodeExt};
use splunk_search_toggle::workflow::{self, RunOptions};
use splunk_search_toggle::IgnoreList;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

/// Layer CLI overrides (highest priority) over environment configuration.
fn build_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new()
        .from_env()
        .context("failed to load configuration from environment")?;

    if let Some(ref url) = cli.splunkmgmt {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref username) = cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(ref password) = cli.password {
        loader = loader.with_password(password.clone());
    }
    if let Some(ref token) = cli.api_token {
        loader = loader.with_api_token(token.clone());
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(secs));
    }
    if let Some(retries) = cli.max_retries {
        loader = loader.with_max_retries(retries);
    }
    if let Some(ms) = cli.poll_interval_ms {
        loader = loader.with_poll_interval(Duration::from_millis(ms));
    }
    if let Some(secs) = cli.max_wait_secs {
        loader = loader.with_max_wait(Duration::from_secs(secs));
    }

    let config = loader.build().context("invalid configuration")?;

    if config.is_using_default_credentials() {
        tracing::warn!(
            "Using default Splunk credentials (admin/changeme). \
             These are for local development only - change before production use."
        );
    }

    Ok(config)
}

async fn run(cli: Cli, cancel: &CancellationToken) -> Result<()> {
    let config = build_config(&cli)?;

    let mut client = SplunkClient::builder()
        .from_config(&config)
        .build()
        .context("failed to build Splunk client")?;
    client.login().await.context("failed to log in to Splunk")?;

    let options = RunOptions {
        runtype: cli.runtype,
        ledger_path: cli.csvlist,
        ignore: IgnoreList::parse(cli.ignoreapps.as_deref()),
        job_wait: config.job_wait,
        show_progress: !cli.quiet,
    };

    let summary = workflow::run(&mut client, &options, cancel).await?;

    println!("Done!");
    println!("{summary}");
    Ok(())
}

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();
    init_logging(cli.log_format);

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run(cli, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            let code = e.exit_code();
            if code == ExitCode::Interrupted {
                print_cancelled_message();
            } else {
                eprintln!("Error: {:#}", e);
            }
            code
        }
    };

    std::process::exit(exit_code.as_i32());
}
