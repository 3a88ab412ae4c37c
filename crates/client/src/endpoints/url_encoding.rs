//! Percent-encoding for REST path segments.
//!
//! Saved search titles are free text. Titles such as `Errors / hour` or
//! `CPU > 90% ?` must reach Splunk as one path segment, so every character
//! that would split the path, start a query or fragment, or be decoded twice
//! is percent-encoded.
//!
//! ```
//! use splunk_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("Errors / hour"), "Errors%20%2F%20hour");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters percent-encoded in a path segment (RFC 3986 section 3.3 plus
/// characters Splunk's REST layer treats specially).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'~')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_titles_unchanged() {
        assert_eq!(encode_path_segment("nightly_rollup"), "nightly_rollup");
        assert_eq!(encode_path_segment("audit-summary.v2"), "audit-summary.v2");
        assert_eq!(encode_path_segment("src::host"), "src::host");
    }

    #[test]
    fn test_spaces_and_slashes() {
        assert_eq!(
            encode_path_segment("Errors / hour"),
            "Errors%20%2F%20hour"
        );
    }

    #[test]
    fn test_quotes_and_specials() {
        assert_eq!(
            encode_path_segment("Alert \"High\" CPU"),
            "Alert%20%22High%22%20CPU"
        );
        assert_eq!(encode_path_segment("CPU > 90% ?"), "CPU%20%3E%2090%25%20%3F");
        assert_eq!(encode_path_segment("a+b,c;d#e"), "a%2Bb%2Cc%3Bd%23e");
        assert_eq!(encode_path_segment("it's"), "it's");
    }

    #[test]
    fn test_unicode_titles() {
        assert_eq!(encode_path_segment("r\u{00e9}sum\u{00e9}"), "r%C3%A9sum%C3%A9");
    }

    proptest! {
        #[test]
        fn prop_encoded_segment_never_splits_path(title in "\\PC{0,40}") {
            let encoded = encode_path_segment(&title);
            prop_assert!(!encoded.contains('/'));
            prop_assert!(!encoded.contains('?'));
            prop_assert!(!encoded.contains('#'));
            prop_assert!(!encoded.contains(' '));
        }
    }
}
