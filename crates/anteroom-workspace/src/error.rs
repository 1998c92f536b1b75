//! Error types for workspace mutations.

/// Errors that can occur when mutating the workspace directory set.
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    /// The directory does not exist on disk.
    #[error("directory does not exist: {path}")]
    NotFound {
        /// The path that was not found.
        path: String,
    },

    /// The path exists but is not a directory.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The offending path.
        path: String,
    },
}

/// Result type for workspace operations.
pub type WorkspaceResult<T> = Result<T, WorkspaceError>;
