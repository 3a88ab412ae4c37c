//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define authentication, connection and job-wait settings.
//! - Combine them into the top-level `Config` consumed by the client and CLI.
//!
//! Does NOT handle:
//! - Loading values from the environment (see `loader` module).
//! - Network connections or authentication flows (see client crate).
//!
//! Invariants:
//! - Secrets are held as `secrecy::SecretString` and never appear in `Debug` output.

mod auth;
pub(crate) mod connection;

pub use auth::{AuthConfig, AuthStrategy};
pub use connection::{Config, ConnectionConfig, JobWaitConfig};
