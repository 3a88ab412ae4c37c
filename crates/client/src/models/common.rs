//! Common types shared across Splunk API models.
//!
//! This module contains generic wrappers and shared types used by multiple
//! resource modules. It does NOT contain resource-specific models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of message from Splunk API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MessageType {
    #[serde(rename = "ERROR")]
    Error,
    #[serde(rename = "WARN")]
    Warn,
    #[serde(rename = "INFO")]
    Info,
    #[serde(rename = "FATAL")]
    Fatal,
    /// Unknown or unrecognized message type.
    #[serde(other)]
    #[default]
    Unknown,
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Warn => write!(f, "WARN"),
            Self::Info => write!(f, "INFO"),
            Self::Fatal => write!(f, "FATAL"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// A single message from Splunk (usually in error responses).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SplunkMessage {
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub text: String,
}

/// A collection of messages from Splunk.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SplunkMessages {
    pub messages: Vec<SplunkMessage>,
}

impl SplunkMessages {
    /// Join all messages into a single `TYPE: text; TYPE: text` line.
    pub fn joined(&self) -> String {
        self.messages
            .iter()
            .map(|msg| format!("{}: {}", msg.message_type, msg.text))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
