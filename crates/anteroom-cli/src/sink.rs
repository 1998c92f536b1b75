//! Terminal message sink.

use anteroom_core::{MessageKind, MessageSink, UserMessage};
use colored::Colorize;

/// Renders user messages to stdout/stderr with timestamps.
pub(crate) struct TerminalSink;

impl MessageSink for TerminalSink {
    fn emit(&self, message: UserMessage) {
        let stamp = message.timestamp.format("%H:%M:%S");
        match message.kind {
            MessageKind::Info => {
                println!("{} {}", format!("[{stamp}]").dimmed(), message.text);
            },
            MessageKind::Error => {
                eprintln!(
                    "{} {}",
                    format!("[{stamp}] error:").red().bold(),
                    message.text
                );
            },
        }
    }
}
