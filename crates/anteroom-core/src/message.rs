//! User-facing messages.
//!
//! Admission outcomes surface to the user as plain-text messages,
//! classified as INFO or ERROR and timestamped at emission time. The
//! exact wording (path lists joined by `\n- `) is part of the
//! observable contract since messages are shown verbatim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Informational output (success reports, listings).
    Info,
    /// Error output (aggregated admission failures).
    Error,
}

/// A plain-text message destined for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMessage {
    /// INFO or ERROR.
    pub kind: MessageKind,
    /// The verbatim text shown to the user.
    pub text: String,
    /// When the message was emitted.
    pub timestamp: DateTime<Utc>,
}

impl UserMessage {
    /// Create an INFO message timestamped now.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create an ERROR message timestamped now.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Destination for user-facing messages.
///
/// Frontends implement this over their rendering surface (terminal,
/// history list); tests implement it over a recording buffer. Emission
/// never suspends, so the trait is synchronous.
pub trait MessageSink: Send + Sync {
    /// Deliver one message to the user.
    fn emit(&self, message: UserMessage);
}
