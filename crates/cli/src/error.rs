//! Process exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish failures.
//! - Map `ClientError`, `ConfigError` and cancellation to those codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-8 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (128 + SIGINT).

use splunk_client::ClientError;
use splunk_config::ConfigError;

use crate::cancellation::is_cancelled_error;

/// Structured exit codes for `splunk-search-toggle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure, including ledger I/O.
    GeneralError = 1,

    /// Invalid credentials or expired session.
    AuthenticationFailed = 2,

    /// Network failure, request timeout or search job wait timeout.
    ConnectionError = 3,

    /// App or saved search not found.
    NotFound = 4,

    /// Bad configuration or unexpected response shape.
    ValidationError = 5,

    /// Insufficient privileges.
    PermissionDenied = 6,

    /// HTTP 429 Too Many Requests.
    RateLimited = 7,

    /// HTTP 502/503/504, or retries exhausted on them.
    ServiceUnavailable = 8,

    /// SIGINT/Ctrl+C.
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with `std::process::exit()`.
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::AuthFailed(_) | ClientError::SessionExpired { .. } => {
                ExitCode::AuthenticationFailed
            }

            ClientError::InvalidUrl(_) | ClientError::OperationTimeout { .. } => {
                ExitCode::ConnectionError
            }

            ClientError::InvalidResponse(_) => ExitCode::ValidationError,

            ClientError::ApiError { status, .. } => match status {
                400 => ExitCode::ValidationError,
                401 => ExitCode::AuthenticationFailed,
                403 => ExitCode::PermissionDenied,
                404 => ExitCode::NotFound,
                429 => ExitCode::RateLimited,
                502..=504 => ExitCode::ServiceUnavailable,
                _ => ExitCode::GeneralError,
            },

            // Only retryable statuses are retried, so exhaustion means the
            // server kept shedding load
            ClientError::MaxRetriesExceeded(_) => ExitCode::ServiceUnavailable,

            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            ClientError::JobFailed { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for `anyhow::Error` to extract exit codes.
pub trait ExitCodeExt {
    /// The exit code for this error; `GeneralError` when nothing more specific applies.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        if is_cancelled_error(self) {
            return ExitCode::Interrupted;
        }

        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ValidationError;
            }
        }

        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancellation::Cancelled;
    use anyhow::Context;
    use std::time::Duration;

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            url: "https://localhost:8089/services/apps/local".to_string(),
            message: "error".to_string(),
            request_id: None,
        }
    }

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::AuthenticationFailed.as_i32(), 2);
        assert_eq!(ExitCode::ServiceUnavailable.as_i32(), 8);
        assert_eq!(ExitCode::Interrupted.as_i32(), 130);
    }

    #[test]
    fn test_api_status_mapping() {
        assert_eq!(ExitCode::from(&api_error(400)), ExitCode::ValidationError);
        assert_eq!(ExitCode::from(&api_error(401)), ExitCode::AuthenticationFailed);
        assert_eq!(ExitCode::from(&api_error(403)), ExitCode::PermissionDenied);
        assert_eq!(ExitCode::from(&api_error(404)), ExitCode::NotFound);
        assert_eq!(ExitCode::from(&api_error(429)), ExitCode::RateLimited);
        assert_eq!(ExitCode::from(&api_error(503)), ExitCode::ServiceUnavailable);
        assert_eq!(ExitCode::from(&api_error(500)), ExitCode::GeneralError);
    }

    #[test]
    fn test_auth_and_timeout_mapping() {
        assert_eq!(
            ExitCode::from(&ClientError::AuthFailed("bad".to_string())),
            ExitCode::AuthenticationFailed
        );
        assert_eq!(
            ExitCode::from(&ClientError::OperationTimeout {
                operation: "wait_for_job",
                timeout: Duration::from_secs(600),
            }),
            ExitCode::ConnectionError
        );
        assert_eq!(
            ExitCode::from(&ClientError::MaxRetriesExceeded(4)),
            ExitCode::ServiceUnavailable
        );
    }

    #[test]
    fn test_exit_code_ext_walks_chain() {
        let err = Err::<(), _>(api_error(403))
            .context("failed to list apps")
            .unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::PermissionDenied);

        let err = anyhow::Error::new(ConfigError::MissingAuth);
        assert_eq!(err.exit_code(), ExitCode::ValidationError);

        let err = anyhow::Error::new(Cancelled).context("while waiting for search");
        assert_eq!(err.exit_code(), ExitCode::Interrupted);

        assert_eq!(anyhow::anyhow!("boom").exit_code(), ExitCode::GeneralError);
    }
}
