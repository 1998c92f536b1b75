//! Session assembly: wires the admission runtime to the frontend.

use std::sync::Arc;

use anteroom_admission::{
    AdmissionController, CompletionReporter, DecisionHandler, MemoryLoader, MemoryReloadPolicy,
    PendingQueue, StartupReconciler,
};
use anteroom_core::{MessageSink, NormalizedPath, UserMessage, normalize};
use anteroom_trust::{MemoryTrustStore, TrustStore, TrustVerdict};
use anteroom_workspace::WorkspaceContext;
use anyhow::{Context, Result};
use tracing::debug;

use crate::config::SessionConfig;
use crate::memory::ContextFileLoader;
use crate::prompt;

/// One CLI session over the admission runtime.
pub(crate) struct Session {
    config: SessionConfig,
    root: NormalizedPath,
    workspace: Arc<WorkspaceContext>,
    controller: Arc<AdmissionController>,
    reporter: Arc<CompletionReporter>,
    reconciler: StartupReconciler,
    sink: Arc<dyn MessageSink>,
    workspace_trusted: bool,
}

impl Session {
    /// Assemble the session: workspace rooted at the current directory,
    /// trust store seeded from config, pending queue seeded from config
    /// plus the `--include-directories` flag.
    pub(crate) fn bootstrap(
        config: SessionConfig,
        extra_include_dirs: Vec<String>,
        sink: Arc<dyn MessageSink>,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to determine working directory")?;
        let root = normalize(
            cwd.to_str()
                .context("working directory is not valid UTF-8")?,
        );

        let trust = Arc::new(MemoryTrustStore::new());
        for path in &config.trusted_directories {
            trust.record(normalize(path), TrustVerdict::Trusted);
        }
        for path in &config.untrusted_directories {
            trust.record(normalize(path), TrustVerdict::Untrusted);
        }

        let queue = Arc::new(PendingQueue::new());
        queue.enqueue(
            config
                .include_directories
                .iter()
                .cloned()
                .chain(extra_include_dirs),
        );

        let policy = MemoryReloadPolicy {
            enabled: config.load_memory_from_include_dirs,
            working_dir: root.clone(),
            debug: config.debug,
            folder_trust: config.folder_trust_enabled,
            import_format: config.import_format.clone(),
            max_dirs: config.discovery_max_dirs,
        };

        Ok(Self::assemble(
            config,
            root,
            trust,
            queue,
            Some((Arc::new(ContextFileLoader) as _, policy)),
            sink,
        ))
    }

    /// Wire the admission machinery around one workspace and one
    /// controller; the reconciler shares that controller so it stays
    /// the sole writer.
    pub(crate) fn assemble(
        config: SessionConfig,
        root: NormalizedPath,
        trust: Arc<dyn TrustStore>,
        queue: Arc<PendingQueue>,
        memory: Option<(Arc<dyn MemoryLoader>, MemoryReloadPolicy)>,
        sink: Arc<dyn MessageSink>,
    ) -> Self {
        let workspace = Arc::new(WorkspaceContext::new(root.clone()));

        let mut reporter = CompletionReporter::new(Arc::clone(&workspace), Arc::clone(&sink));
        if let Some((loader, policy)) = memory {
            reporter = reporter.with_memory(loader, policy);
        }
        let reporter = Arc::new(reporter);

        let controller = Arc::new(AdmissionController::new(trust, Arc::clone(&workspace)));
        let reconciler =
            StartupReconciler::new(Arc::clone(&controller), Arc::clone(&reporter), queue);

        Self {
            config,
            root,
            workspace,
            controller,
            reporter,
            reconciler,
            sink,
            workspace_trusted: false,
        }
    }

    /// Resolve the workspace's own trust verdict, then run the startup
    /// reconciliation of pending include directories.
    pub(crate) async fn resolve_trust_and_reconcile(&mut self, dialog: &dyn DecisionHandler) {
        let trusted = match self.config.workspace_trusted {
            Some(trusted) => trusted,
            None if self.config.folder_trust_enabled => {
                prompt::confirm_workspace_trust(&self.root).await
            },
            None => false,
        };
        debug!(trusted, "workspace trust verdict resolved");
        self.workspace_trusted = trusted;

        self.reconciler
            .on_trust_resolved(trusted, self.config.folder_trust_enabled, dialog)
            .await;
    }

    pub(crate) fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub(crate) fn workspace(&self) -> &Arc<WorkspaceContext> {
        &self.workspace
    }

    pub(crate) fn controller(&self) -> &AdmissionController {
        &self.controller
    }

    pub(crate) fn reporter(&self) -> &CompletionReporter {
        &self.reporter
    }

    pub(crate) fn workspace_trusted(&self) -> bool {
        self.workspace_trusted
    }

    pub(crate) fn emit(&self, message: UserMessage) {
        self.sink.emit(message);
    }
}
