//! Anteroom Core - Foundation types for the workspace admission runtime.
//!
//! This crate provides:
//! - Path normalization (home expansion, lexical `.`/`..` collapsing)
//! - The [`NormalizedPath`] key type used for trust lookups and
//!   workspace membership
//! - User-facing message types and the [`MessageSink`] reporting seam

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

pub mod message;
pub mod path;

pub use message::{MessageKind, MessageSink, UserMessage};
pub use path::{NormalizedPath, normalize, normalize_with_home};
