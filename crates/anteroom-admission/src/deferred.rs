//! The suspended state for unknown-trust paths.
//!
//! When a batch leaves paths with no recorded trust verdict, the
//! admission suspends: the accumulated successes and errors are carried
//! forward inside a [`PendingAdmission`], a confirmation surface lists
//! exactly the pending paths, and a single external decision resolves
//! the whole thing. `resolve` consumes the state, so a decision can be
//! applied at most once and the workflow cannot reopen; abandoning the
//! surface simply never completes the admission.

use anteroom_core::normalize;
use anteroom_workspace::WorkspaceContext;
use async_trait::async_trait;
use tracing::debug;

use crate::admit::AdmissionOutcome;
use crate::queue::PendingQueue;
use crate::report::CompletionReporter;

/// The user's bulk decision over the pending paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustDecision {
    /// Trust every pending path; add them to the workspace now.
    TrustAll,
    /// Deny every pending path; add nothing further.
    DenyAll,
}

/// A confirmation surface for pending trust decisions.
///
/// Frontends implement this over their dialog machinery. Returning
/// `None` means the surface went away without a decision (process
/// exit); the admission is then left unresolved — there is no timeout,
/// and no locks are held while waiting.
#[async_trait]
pub trait DecisionHandler: Send + Sync {
    /// Present the pending folders and wait for the user's decision.
    async fn decide(&self, folders: &[String]) -> Option<TrustDecision>;
}

/// Admission suspended on an external trust decision.
///
/// Holds the paths awaiting the decision and the `added`/`errors`
/// accumulated before suspension. Consuming [`resolve`](Self::resolve)
/// is the only transition out of this state.
#[derive(Debug)]
pub struct PendingAdmission {
    folders: Vec<String>,
    carried: AdmissionOutcome,
    silent: bool,
}

impl PendingAdmission {
    /// Suspend an outcome whose `pending_unknown` set is non-empty.
    ///
    /// The pending paths move into the suspended state; the rest of the
    /// outcome is carried forward untouched.
    #[must_use]
    pub fn from_outcome(mut outcome: AdmissionOutcome, silent: bool) -> Self {
        let folders = std::mem::take(&mut outcome.pending_unknown);
        Self {
            folders,
            carried: outcome,
            silent,
        }
    }

    /// The display paths awaiting a decision.
    #[must_use]
    pub fn folders(&self) -> &[String] {
        &self.folders
    }

    /// Whether the eventual completion report suppresses the success
    /// message.
    #[must_use]
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// Apply the decision, merging accepted paths into the carried
    /// outcome.
    ///
    /// Accepted paths are added to the workspace at this point, not
    /// earlier; each add failure becomes one isolated error line, same
    /// as in the immediate path. Consumes the state: a decision
    /// resolves exactly once.
    #[must_use]
    pub fn resolve(self, decision: TrustDecision, workspace: &WorkspaceContext) -> AdmissionOutcome {
        let mut outcome = self.carried;
        match decision {
            TrustDecision::DenyAll => {
                debug!(count = self.folders.len(), "pending folders denied");
            },
            TrustDecision::TrustAll => {
                for display in &self.folders {
                    let normalized = normalize(display);
                    match workspace.add_directory(&normalized) {
                        Ok(()) => outcome.added.push(normalized),
                        Err(e) => outcome.errors.push(format!("Error adding '{display}': {e}")),
                    }
                }
            },
        }
        outcome
    }
}

/// Drive a suspended admission through its decision and completion.
///
/// Waits (unbounded) for the handler's decision, resolves, reports the
/// full carried-forward sets, and clears the associated pending queue
/// when one exists. When the handler returns `None` the admission stays
/// unresolved and the queue is left alone; the queue is not persisted,
/// so a process restart simply starts over.
pub async fn await_decision(
    pending: PendingAdmission,
    handler: &dyn DecisionHandler,
    workspace: &WorkspaceContext,
    reporter: &CompletionReporter,
    queue: Option<&PendingQueue>,
) {
    let silent = pending.is_silent();
    match handler.decide(pending.folders()).await {
        Some(decision) => {
            let outcome = pending.resolve(decision, workspace);
            reporter.finish(&outcome.added, outcome.errors, silent).await;
            if let Some(queue) = queue {
                queue.clear();
            }
        },
        None => debug!("trust decision surface closed; admission left unresolved"),
    }
}
