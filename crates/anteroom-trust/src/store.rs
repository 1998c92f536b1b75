//! The trust-store seam and its in-memory implementation.

use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

use anteroom_core::NormalizedPath;

use crate::verdict::TrustVerdict;

/// Source of per-path trust verdicts.
///
/// Implementations look up the verdict for a normalized path. Paths
/// with no recorded decision return [`TrustVerdict::Unknown`].
pub trait TrustStore: Send + Sync {
    /// Classify a normalized path.
    fn verdict(&self, path: &NormalizedPath) -> TrustVerdict;
}

/// In-memory trust store keyed by normalized path.
///
/// Thread-safe via internal [`RwLock`]. Frontends seed it from their
/// own configuration; tests seed it directly.
///
/// # Example
///
/// ```
/// use anteroom_core::normalize_with_home;
/// use anteroom_trust::{MemoryTrustStore, TrustStore, TrustVerdict};
///
/// let store = MemoryTrustStore::new();
/// let path = normalize_with_home("/opt/proj", None);
/// assert!(store.verdict(&path).is_unknown());
///
/// store.record(path.clone(), TrustVerdict::Trusted);
/// assert!(store.verdict(&path).is_trusted());
/// ```
#[derive(Default)]
pub struct MemoryTrustStore {
    entries: RwLock<HashMap<NormalizedPath, TrustVerdict>>,
}

impl MemoryTrustStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a verdict for a path, replacing any previous one.
    pub fn record(&self, path: NormalizedPath, verdict: TrustVerdict) {
        let mut entries = self.entries.write().unwrap_or_else(|e| {
            tracing::warn!("MemoryTrustStore write lock poisoned, recovering");
            e.into_inner()
        });
        entries.insert(path, verdict);
    }

    /// Number of recorded verdicts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// True when no verdict has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<NormalizedPath, TrustVerdict>> {
        self.entries.read().unwrap_or_else(|e| {
            tracing::warn!("MemoryTrustStore read lock poisoned, recovering");
            e.into_inner()
        })
    }
}

impl TrustStore for MemoryTrustStore {
    fn verdict(&self, path: &NormalizedPath) -> TrustVerdict {
        self.read()
            .get(path)
            .copied()
            .unwrap_or(TrustVerdict::Unknown)
    }
}

impl fmt::Debug for MemoryTrustStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryTrustStore")
            .field("entries", &self.len())
            .finish()
    }
}
