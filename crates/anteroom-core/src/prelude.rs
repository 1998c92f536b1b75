//! Prelude module - commonly used types for convenient import.
//!
//! Use `use anteroom_core::prelude::*;` to import all essential types.

// Path normalization
pub use crate::{NormalizedPath, normalize, normalize_with_home};

// Messaging
pub use crate::{MessageKind, MessageSink, UserMessage};
