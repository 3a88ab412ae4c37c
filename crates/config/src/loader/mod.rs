//! Configuration loader for `.env` files, environment variables and CLI overrides.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//! - Validate the `host:port` management endpoint form.
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod endpoint;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use endpoint::parse_management_endpoint;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
