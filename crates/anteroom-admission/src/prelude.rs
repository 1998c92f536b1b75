//! Prelude module - commonly used types for convenient import.
//!
//! Use `use anteroom_admission::prelude::*;` to import all essential types.

// Batch admission
pub use crate::{AdmissionController, AdmissionOutcome};

// Deferred decisions
pub use crate::{DecisionHandler, PendingAdmission, TrustDecision, await_decision};

// Pending startup directories
pub use crate::{PendingQueue, StartupReconciler};

// Completion reporting
pub use crate::{CompletionReporter, MemoryLoader, MemoryReloadPolicy, SessionNotifier};

// Errors
pub use crate::AdmissionError;
