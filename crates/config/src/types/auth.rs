//! Authentication types.
//!
//! Responsibilities:
//! - Define the supported authentication strategies (session login, API token).
//!
//! Does NOT handle:
//! - Token exchange with the server (see client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.

use secrecy::SecretString;

/// Strategy for authenticating with Splunk.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// Username and password authentication (creates session token)
    SessionToken {
        username: String,
        password: SecretString,
    },
    /// API token (bearer token authentication)
    ApiToken { token: SecretString },
}

/// Authentication configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    pub strategy: AuthStrategy,
}

impl AuthStrategy {
    /// Short, secret-free label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SessionToken { .. } => "session",
            Self::ApiToken { .. } => "token",
        }
    }
}
