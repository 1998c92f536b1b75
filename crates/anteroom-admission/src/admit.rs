//! Batch admission: partition by trust verdict, apply, aggregate.

use std::sync::Arc;

use anteroom_core::{NormalizedPath, normalize};
use anteroom_trust::{TrustStore, TrustVerdict};
use anteroom_workspace::WorkspaceContext;
use tracing::debug;

/// The aggregated result of one admission pass.
///
/// Grows monotonically while a batch is processed and while a deferred
/// decision is resolved; it never shrinks. Order within each field
/// follows the original request order.
#[derive(Debug, Default)]
pub struct AdmissionOutcome {
    /// Directories added to the workspace, in admission order.
    pub added: Vec<NormalizedPath>,
    /// User-visible error lines accumulated so far.
    pub errors: Vec<String>,
    /// Display paths whose trust is unknown, awaiting a user decision.
    pub pending_unknown: Vec<String>,
}

impl AdmissionOutcome {
    /// True when unknown-trust paths await an external decision.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending_unknown.is_empty()
    }

    /// True when there is anything to report (successes or errors).
    #[must_use]
    pub fn has_report(&self) -> bool {
        !self.added.is_empty() || !self.errors.is_empty()
    }
}

/// Partitions requested paths by trust verdict and mutates the
/// workspace accordingly.
///
/// The controller is the sole writer of its [`WorkspaceContext`].
/// Within a batch, paths are processed one at a time in request order;
/// a failed add never aborts the rest of the batch.
pub struct AdmissionController {
    trust: Arc<dyn TrustStore>,
    workspace: Arc<WorkspaceContext>,
}

impl AdmissionController {
    /// Create a controller over the session's trust store and workspace.
    #[must_use]
    pub fn new(trust: Arc<dyn TrustStore>, workspace: Arc<WorkspaceContext>) -> Self {
        Self { trust, workspace }
    }

    /// The workspace this controller mutates.
    #[must_use]
    pub fn workspace(&self) -> &Arc<WorkspaceContext> {
        &self.workspace
    }

    /// Admit a batch of requested paths.
    ///
    /// Trust classification only gates admission when trust enforcement
    /// is active AND the workspace itself is already trusted; otherwise
    /// every path is attempted directly, with zero trust lookups. A
    /// not-yet-trusted workspace therefore admits without
    /// classification (see DESIGN.md for the recorded decision).
    ///
    /// Callers filter blank tokens beforehand; each entry here is
    /// assumed non-empty once trimmed.
    #[must_use]
    pub fn admit(
        &self,
        requests: &[String],
        workspace_trusted: bool,
        trust_enforced: bool,
    ) -> AdmissionOutcome {
        let mut outcome = AdmissionOutcome::default();

        if !trust_enforced || !workspace_trusted {
            debug!(
                count = requests.len(),
                trust_enforced, workspace_trusted, "admitting without trust classification"
            );
            for raw in requests {
                let display = raw.trim();
                let normalized = normalize(display);
                self.try_add(display, &normalized, &mut outcome);
            }
            return outcome;
        }

        let mut untrusted: Vec<String> = Vec::new();
        for raw in requests {
            let display = raw.trim();
            let normalized = normalize(display);
            match self.trust.verdict(&normalized) {
                TrustVerdict::Untrusted => untrusted.push(display.to_owned()),
                TrustVerdict::Unknown => outcome.pending_unknown.push(display.to_owned()),
                TrustVerdict::Trusted => self.try_add(display, &normalized, &mut outcome),
            }
        }

        if !untrusted.is_empty() {
            outcome.errors.push(untrusted_rejection(&untrusted));
        }

        outcome
    }

    /// Attempt one workspace addition, folding the result into the
    /// outcome. Failures become one isolated error line.
    fn try_add(&self, display: &str, normalized: &NormalizedPath, outcome: &mut AdmissionOutcome) {
        match self.workspace.add_directory(normalized) {
            Ok(()) => {
                debug!(path = %normalized, "admitted directory");
                outcome.added.push(normalized.clone());
            },
            Err(e) => outcome.errors.push(format!("Error adding '{display}': {e}")),
        }
    }
}

impl std::fmt::Debug for AdmissionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdmissionController")
            .field("workspace", &self.workspace)
            .finish_non_exhaustive()
    }
}

/// The single aggregated rejection for explicitly untrusted paths.
fn untrusted_rejection(untrusted: &[String]) -> String {
    format!(
        "The following directories are explicitly untrusted and cannot be added to a trusted workspace:\n- {}\nPlease use the permissions command to modify their trust level.",
        untrusted.join("\n- ")
    )
}
