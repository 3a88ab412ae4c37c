//! Configuration management for the Splunk saved-search toggle.
//!
//! This crate provides types and loaders for the connection, authentication
//! and search job settings, sourced from `.env` files, environment variables
//! and command-line overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none, parse_management_endpoint};
pub use types::{AuthConfig, AuthStrategy, Config, ConnectionConfig, JobWaitConfig};
