//! Startup reconciliation of pending include directories.
//!
//! Directories supplied at session start wait in the [`PendingQueue`]
//! until the workspace's own trust status is determined. This component
//! latches on that event and runs exactly one reconciliation pass:
//! bypass admission when trust enforcement is off or the workspace
//! resolved untrusted, the full enforced flow otherwise, suspending on
//! unknown-trust paths like any other batch. Startup admissions report
//! silently — errors surface, success listings do not.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::admit::AdmissionController;
use crate::deferred::{DecisionHandler, PendingAdmission, await_decision};
use crate::queue::PendingQueue;
use crate::report::CompletionReporter;

/// Drains the pending queue once the workspace trust verdict is known.
///
/// Shares the session's one [`AdmissionController`] rather than owning
/// a second instance, so the controller stays the sole writer of its
/// workspace.
pub struct StartupReconciler {
    controller: Arc<AdmissionController>,
    reporter: Arc<CompletionReporter>,
    queue: Arc<PendingQueue>,
    checked: AtomicBool,
}

impl StartupReconciler {
    /// Create a reconciler over the session's admission machinery.
    #[must_use]
    pub fn new(
        controller: Arc<AdmissionController>,
        reporter: Arc<CompletionReporter>,
        queue: Arc<PendingQueue>,
    ) -> Self {
        Self {
            controller,
            reporter,
            queue,
            checked: AtomicBool::new(false),
        }
    }

    /// React to the workspace trust verdict becoming known.
    ///
    /// Latched: only the first call per session does anything, whatever
    /// the outcome. The queue is cleared even when the resulting
    /// admission reports errors — pending directories are never retried
    /// automatically.
    pub async fn on_trust_resolved(
        &self,
        workspace_trusted: bool,
        trust_enforced: bool,
        handler: &dyn DecisionHandler,
    ) {
        if self.checked.swap(true, Ordering::SeqCst) {
            debug!("startup reconciliation already ran; ignoring");
            return;
        }

        let drained = self.queue.drain();
        if drained.is_empty() {
            return;
        }

        let outcome = self
            .controller
            .admit(&drained, workspace_trusted, trust_enforced);

        if outcome.has_pending() {
            let pending = PendingAdmission::from_outcome(outcome, true);
            await_decision(
                pending,
                handler,
                self.controller.workspace(),
                &self.reporter,
                Some(self.queue.as_ref()),
            )
            .await;
            return;
        }

        if outcome.has_report() {
            self.reporter.finish(&outcome.added, outcome.errors, true).await;
        }
        self.queue.clear();
    }
}

impl std::fmt::Debug for StartupReconciler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StartupReconciler")
            .field("checked", &self.checked)
            .finish_non_exhaustive()
    }
}
