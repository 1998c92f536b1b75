//! The process-wide queue of directories awaiting the workspace trust
//! verdict.
//!
//! Directories supplied before the workspace's own trust status is
//! known (typically via a startup flag) wait here. The queue drains
//! exactly once, when the overall verdict lands: the drain latches, so
//! a second trigger is a no-op, and the queue never refills itself —
//! failed admissions are surfaced, not retried.

use std::sync::Mutex;

use tracing::{debug, warn};

#[derive(Debug, Default)]
struct QueueState {
    entries: Vec<String>,
    drained: bool,
}

/// Latched single-drain queue of raw requested paths.
#[derive(Debug, Default)]
pub struct PendingQueue {
    inner: Mutex<QueueState>,
}

impl PendingQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append requested paths.
    ///
    /// Enqueueing after the drain has fired is ignored: queue entries
    /// are consumed exactly once per session.
    pub fn enqueue(&self, paths: impl IntoIterator<Item = String>) {
        let mut state = self.lock();
        if state.drained {
            warn!("PendingQueue already drained; ignoring late enqueue");
            return;
        }
        state.entries.extend(paths);
    }

    /// Take every queued path, latching the drain.
    ///
    /// The first call returns the entries and marks the queue drained;
    /// every later call returns an empty list. Draining an empty queue
    /// is a no-op that still latches.
    #[must_use]
    pub fn drain(&self) -> Vec<String> {
        let mut state = self.lock();
        if state.drained {
            return Vec::new();
        }
        state.drained = true;
        let drained = std::mem::take(&mut state.entries);
        debug!(count = drained.len(), "drained pending include directories");
        drained
    }

    /// Discard any remaining entries and latch.
    ///
    /// Called once the triggering admission has completed, successfully
    /// or not.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.drained = true;
    }

    /// True when nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, QueueState> {
        self.inner.lock().unwrap_or_else(|e| {
            warn!("PendingQueue lock poisoned, recovering");
            e.into_inner()
        })
    }
}
