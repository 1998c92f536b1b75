//! Anteroom Trust - Per-path trust verdicts.
//!
//! Admission consumes a tri-state trust classification for each
//! normalized path: trusted, untrusted, or unknown. How verdicts are
//! computed and persisted is deliberately outside this crate; the
//! [`TrustStore`] trait is the seam, and [`MemoryTrustStore`] is the
//! concrete store frontends and tests wire in.
//!
//! Verdicts are re-queried per admission batch and never cached across
//! batches — trust may change between sessions.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

pub mod store;
pub mod verdict;

pub use store::{MemoryTrustStore, TrustStore};
pub use verdict::TrustVerdict;
