//! Management endpoint validation.
//!
//! Operators supply the management endpoint as bare `host:port`
//! (`splunk.example.com:8089`, `10.0.0.5:8089`). The host is one or more
//! dot-separated labels of ASCII letters, digits, `_` or `-`; the port is a
//! non-zero decimal number. The validated value is turned into an `https://`
//! base URL.

use super::error::ConfigError;

/// Validate a `host:port` management endpoint and return its `https://` base URL.
pub fn parse_management_endpoint(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let invalid = || ConfigError::InvalidManagementEndpoint {
        value: trimmed.to_string(),
    };

    let (host, port) = trimmed.rsplit_once(':').ok_or_else(invalid)?;

    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let port: u16 = port.parse().map_err(|_| invalid())?;
    if port == 0 {
        return Err(invalid());
    }

    if host.is_empty() || !host.split('.').all(is_valid_label) {
        return Err(invalid());
    }

    let base_url = format!("https://{host}:{port}");
    url::Url::parse(&base_url).map_err(|_| invalid())?;
    Ok(base_url)
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}
