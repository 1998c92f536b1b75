//! The mutable workspace directory set.

use std::fmt;
use std::sync::RwLock;

use anteroom_core::NormalizedPath;
use tracing::debug;

use crate::error::{WorkspaceError, WorkspaceResult};

/// Ordered set of active workspace directories.
///
/// Holds the session root plus every admitted directory, in insertion
/// order, with no duplicates. Thread-safe via internal [`RwLock`];
/// additions are validated against the filesystem (the directory must
/// exist), but entries are stored in their normalized lexical form —
/// symlinks are not resolved.
pub struct WorkspaceContext {
    directories: RwLock<Vec<NormalizedPath>>,
}

impl WorkspaceContext {
    /// Create a workspace rooted at the session's main directory.
    #[must_use]
    pub fn new(root: NormalizedPath) -> Self {
        Self {
            directories: RwLock::new(vec![root]),
        }
    }

    /// Add a directory to the workspace.
    ///
    /// Adding an already-present directory is an idempotent success.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::NotFound`] when the path does not
    /// exist, or [`WorkspaceError::NotADirectory`] when it exists but is
    /// not a directory. A failed add leaves the set untouched.
    pub fn add_directory(&self, path: &NormalizedPath) -> WorkspaceResult<()> {
        if !path.as_path().exists() {
            return Err(WorkspaceError::NotFound {
                path: path.to_string(),
            });
        }
        if !path.as_path().is_dir() {
            return Err(WorkspaceError::NotADirectory {
                path: path.to_string(),
            });
        }

        let mut directories = self.write();
        if directories.iter().any(|existing| existing == path) {
            debug!(path = %path, "directory already in workspace");
            return Ok(());
        }
        debug!(path = %path, "directory added to workspace");
        directories.push(path.clone());
        Ok(())
    }

    /// Enumerate the workspace directories in insertion order.
    #[must_use]
    pub fn directories(&self) -> Vec<NormalizedPath> {
        self.read().clone()
    }

    /// Check whether a directory is already in the workspace.
    #[must_use]
    pub fn contains(&self, path: &NormalizedPath) -> bool {
        self.read().iter().any(|existing| existing == path)
    }

    /// Number of directories, including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Always false: the set retains its root for the session lifetime.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<NormalizedPath>> {
        self.directories.read().unwrap_or_else(|e| {
            tracing::warn!("WorkspaceContext read lock poisoned, recovering");
            e.into_inner()
        })
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<NormalizedPath>> {
        self.directories.write().unwrap_or_else(|e| {
            tracing::warn!("WorkspaceContext write lock poisoned, recovering");
            e.into_inner()
        })
    }
}

impl fmt::Debug for WorkspaceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkspaceContext")
            .field("directories", &self.directories())
            .finish()
    }
}
