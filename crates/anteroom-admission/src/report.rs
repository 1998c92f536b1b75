//! Completion reporting: post-admission side effects and user messages.

use std::sync::Arc;

use anteroom_core::{MessageSink, NormalizedPath, UserMessage};
use anteroom_workspace::WorkspaceContext;
use async_trait::async_trait;
use tracing::debug;

/// Parameters for one hierarchical memory reload.
#[derive(Debug, Clone)]
pub struct MemoryLoadRequest {
    /// The session's main working directory.
    pub working_dir: NormalizedPath,
    /// The full current workspace directory set.
    pub directories: Vec<NormalizedPath>,
    /// Whether debug diagnostics are enabled.
    pub debug: bool,
    /// The session's folder-trust flag, forwarded to the loader.
    pub folder_trust: bool,
    /// Import format for nested context files (e.g. `tree`).
    pub import_format: String,
    /// Cap on the number of directories scanned, when set.
    pub max_dirs: Option<usize>,
}

/// Result of a memory reload.
#[derive(Debug, Clone)]
pub struct MemorySnapshot {
    /// Concatenated context-file content.
    pub content: String,
    /// Number of context files found.
    pub file_count: usize,
}

/// Hierarchical memory loader collaborator.
///
/// Failures are caught by the reporter and converted to an error line;
/// they never propagate and never roll back admitted directories.
#[async_trait]
pub trait MemoryLoader: Send + Sync {
    /// Reload memory across the given directory set.
    async fn load(&self, request: MemoryLoadRequest) -> anyhow::Result<MemorySnapshot>;
}

/// Optional content-generation session collaborator, told when the
/// directory context changed.
#[async_trait]
pub trait SessionNotifier: Send + Sync {
    /// Notify the session that the workspace directory set changed.
    async fn directory_context_changed(&self);
}

/// Session knobs governing the memory reload step.
#[derive(Debug, Clone)]
pub struct MemoryReloadPolicy {
    /// Reload memory when include-directories change.
    pub enabled: bool,
    /// The session's main working directory.
    pub working_dir: NormalizedPath,
    /// Debug diagnostics flag forwarded to the loader.
    pub debug: bool,
    /// Folder-trust flag forwarded to the loader.
    pub folder_trust: bool,
    /// Import format forwarded to the loader.
    pub import_format: String,
    /// Directory-scan cap forwarded to the loader.
    pub max_dirs: Option<usize>,
}

/// Runs the side effects that follow a finished admission and emits the
/// user-visible outcome.
///
/// The success and error emissions are independent: a partial-success
/// batch produces both. `silent` suppresses only the success side
/// (used for background/startup admissions); errors always surface.
pub struct CompletionReporter {
    workspace: Arc<WorkspaceContext>,
    sink: Arc<dyn MessageSink>,
    memory: Option<(Arc<dyn MemoryLoader>, MemoryReloadPolicy)>,
    notifier: Option<Arc<dyn SessionNotifier>>,
}

impl CompletionReporter {
    /// Create a reporter over the session workspace and message sink.
    #[must_use]
    pub fn new(workspace: Arc<WorkspaceContext>, sink: Arc<dyn MessageSink>) -> Self {
        Self {
            workspace,
            sink,
            memory: None,
            notifier: None,
        }
    }

    /// Attach a memory loader and its reload policy.
    #[must_use]
    pub fn with_memory(mut self, loader: Arc<dyn MemoryLoader>, policy: MemoryReloadPolicy) -> Self {
        self.memory = Some((loader, policy));
        self
    }

    /// Attach a content-generation session notifier.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn SessionNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Report the outcome of a finished admission.
    ///
    /// With a non-empty `added` set: reload memory (policy permitting;
    /// a reload failure is downgraded to an `Error refreshing memory:`
    /// line), notify the session, then emit the success listing unless
    /// `silent`. A non-empty error set is always emitted as one
    /// newline-joined ERROR message.
    pub async fn finish(&self, added: &[NormalizedPath], errors: Vec<String>, silent: bool) {
        let mut errors = errors;

        if !added.is_empty() {
            if let Some((loader, policy)) = &self.memory
                && policy.enabled
            {
                let request = MemoryLoadRequest {
                    working_dir: policy.working_dir.clone(),
                    directories: self.workspace.directories(),
                    debug: policy.debug,
                    folder_trust: policy.folder_trust,
                    import_format: policy.import_format.clone(),
                    max_dirs: policy.max_dirs,
                };
                match loader.load(request).await {
                    Ok(snapshot) => {
                        debug!(file_count = snapshot.file_count, "memory reloaded");
                        if !silent {
                            self.sink.emit(UserMessage::info(format!(
                                "Refreshed memory from {} context file(s) under:\n- {}",
                                snapshot.file_count,
                                join_paths(added)
                            )));
                        }
                    },
                    Err(e) => errors.push(format!("Error refreshing memory: {e}")),
                }
            }

            if let Some(notifier) = &self.notifier {
                notifier.directory_context_changed().await;
            }

            if !silent {
                self.sink.emit(UserMessage::info(format!(
                    "Successfully added directories:\n- {}",
                    join_paths(added)
                )));
            }
        }

        if !errors.is_empty() {
            self.sink.emit(UserMessage::error(errors.join("\n")));
        }
    }
}

impl std::fmt::Debug for CompletionReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionReporter")
            .field("workspace", &self.workspace)
            .field("memory", &self.memory.as_ref().map(|(_, p)| p))
            .finish_non_exhaustive()
    }
}

/// Join paths for display, one per line with a `- ` bullet.
fn join_paths(paths: &[NormalizedPath]) -> String {
    paths
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n- ")
}
