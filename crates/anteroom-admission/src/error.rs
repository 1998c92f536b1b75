//! Structural rejections that occur before any path is processed.
//!
//! Everything that happens *inside* a batch is aggregated into the
//! [`AdmissionOutcome`](crate::AdmissionOutcome) message strings; these
//! errors are the terminal, pre-batch cases. Their display text is
//! shown to the user verbatim.

/// Errors that abort an admission invocation before any path is touched.
#[derive(Debug, thiserror::Error)]
pub enum AdmissionError {
    /// The session has no active configuration.
    #[error("Configuration is not available.")]
    ConfigurationUnavailable,

    /// The add command received zero non-empty paths after splitting.
    #[error("Please provide at least one path to add.")]
    NoPathsProvided,

    /// The execution sandbox forbids runtime directory additions.
    #[error(
        "The directory add command is not supported in restrictive sandbox profiles. Please use --include-directories when starting the session instead."
    )]
    RestrictiveSandbox,
}
