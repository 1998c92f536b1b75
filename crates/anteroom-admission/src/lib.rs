//! Anteroom Admission - The trust-gated directory admission workflow.
//!
//! This crate decides whether user-supplied paths may join a session's
//! active workspace:
//!
//! - [`AdmissionController`] partitions a batch by trust verdict,
//!   applies trusted paths immediately, rejects untrusted ones with one
//!   aggregated error, and defers unknown ones.
//! - [`PendingAdmission`] is the suspended state for deferred paths,
//!   resolved exactly once through a [`DecisionHandler`].
//! - [`PendingQueue`] holds directories supplied before the workspace's
//!   own trust status was known; it drains exactly once.
//! - [`CompletionReporter`] runs the post-admission side effects
//!   (memory reload, session notification) and emits the user-visible
//!   outcome.
//!
//! No failure crosses the admission boundary as an exception: batch
//! failures are accumulated into message strings and reported together
//! with the successes.
//!
//! # Example
//!
//! ```rust,ignore
//! use anteroom_admission::AdmissionController;
//!
//! let controller = AdmissionController::new(trust_store, workspace);
//! let outcome = controller.admit(&paths, workspace_trusted, trust_enforced);
//! if outcome.has_pending() {
//!     // surface a confirmation dialog for outcome.pending_unknown
//! }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

pub mod admit;
pub mod deferred;
pub mod error;
pub mod queue;
pub mod report;
pub mod startup;

#[cfg(test)]
pub(crate) mod testing;

pub use admit::{AdmissionController, AdmissionOutcome};
pub use deferred::{DecisionHandler, PendingAdmission, TrustDecision, await_decision};
pub use error::AdmissionError;
pub use queue::PendingQueue;
pub use report::{
    CompletionReporter, MemoryLoadRequest, MemoryLoader, MemoryReloadPolicy, MemorySnapshot,
    SessionNotifier,
};
pub use startup::StartupReconciler;
