//! Serde helpers for Splunk's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Provide deserializers that accept either JSON numbers or strings for numeric fields.
//! - Accept Splunk's assorted boolean spellings (`true`, `1`, `"1"`, `"true"`).
//!
//! Invariants / assumptions:
//! - Splunk may return numeric fields as `"123"` strings or as `123` numbers depending on endpoint/version.
//! - `| rest` search results carry every field as a string.
//! - These helpers must not log or print secrets; errors should be generic parse errors.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum U64OrString {
    U64(u64),
    I64(i64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum F64OrString {
    F64(f64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BoolLike {
    Bool(bool),
    U64(u64),
    String(String),
}

pub fn usize_from_string_or_number<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = U64OrString::deserialize(deserializer)?;
    match value {
        U64OrString::U64(v) => usize::try_from(v).map_err(D::Error::custom),
        U64OrString::I64(v) => usize::try_from(v).map_err(D::Error::custom),
        U64OrString::String(s) => s.trim().parse::<usize>().map_err(D::Error::custom),
    }
}

pub fn f64_from_string_or_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match F64OrString::deserialize(deserializer)? {
        F64OrString::F64(v) => Ok(v),
        F64OrString::String(s) => s.trim().parse::<f64>().map_err(D::Error::custom),
    }
}

pub fn bool_from_string_or_number<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match BoolLike::deserialize(deserializer)? {
        BoolLike::Bool(b) => Ok(b),
        BoolLike::U64(0) => Ok(false),
        BoolLike::U64(1) => Ok(true),
        BoolLike::U64(v) => Err(D::Error::custom(format!("invalid boolean value: {v}"))),
        BoolLike::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "t" | "yes" => Ok(true),
            "0" | "false" | "f" | "no" | "" => Ok(false),
            other => Err(D::Error::custom(format!("invalid boolean value: {other}"))),
        },
    }
}
